pub mod auth_routes;
pub mod auto_routes;
pub mod cita_routes;
pub mod reporte_routes;
