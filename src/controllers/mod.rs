pub mod auth_controller;
pub mod auto_controller;
pub mod cita_controller;
