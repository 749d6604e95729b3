pub mod auto;
pub mod cita;
pub mod user;
