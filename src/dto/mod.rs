pub mod auth_dto;
pub mod auto_dto;
pub mod cita_dto;
