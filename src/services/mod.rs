pub mod reporte_service;
pub mod venta_service;
