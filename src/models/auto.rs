//! Modelo de Auto
//!
//! Mapea exactamente a la tabla `autos`. El flag `disponible` es la única
//! mutación permitida después de la creación y solo baja a `false` vía la
//! venta en cascada (`services::venta_service`).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// Auto del catálogo - mapea a la tabla autos
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Auto {
    pub id: i64,
    pub marca: String,
    pub modelo: String,
    pub precio: Decimal,
    pub descripcion: Option<String>,
    pub imagen_path: String,
    pub disponible: bool,
    pub created_at: DateTime<Utc>,
}

impl Auto {
    /// Etiqueta "marca modelo" usada en el reporte denormalizado
    pub fn descripcion_corta(&self) -> String {
        format!("{} {}", self.marca, self.modelo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descripcion_corta() {
        let auto = Auto {
            id: 1,
            marca: "Toyota".to_string(),
            modelo: "Corolla".to_string(),
            precio: Decimal::from(15000),
            descripcion: None,
            imagen_path: "/img/1.png".to_string(),
            disponible: true,
            created_at: Utc::now(),
        };
        assert_eq!(auto.descripcion_corta(), "Toyota Corolla");
    }
}
