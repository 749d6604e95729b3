pub mod auto_repository;
pub mod cita_repository;
pub mod user_repository;
