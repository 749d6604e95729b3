//! Utilidades de validación
//!
//! Funciones helper para validación de datos de entrada.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::utils::errors::AppError;

/// Validar y convertir string a fecha (formato YYYY-MM-DD)
pub fn validate_fecha(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        AppError::Validation(format!(
            "Fecha inválida: '{}' (formato esperado YYYY-MM-DD)",
            value
        ))
    })
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str, field: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("El campo '{}' es requerido", field)));
    }
    Ok(())
}

/// Validar que un precio no sea negativo
pub fn validate_precio(value: Decimal) -> Result<(), AppError> {
    if value < Decimal::ZERO {
        return Err(AppError::Validation(
            "El precio no puede ser negativo".to_string(),
        ));
    }
    Ok(())
}
