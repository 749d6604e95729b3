//! DTOs de Auto
//!
//! Requests y responses de la API de catálogo. Los nombres de campo
//! siguen el formato camelCase del wire (`imagenPath`, `createdAt`).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::dto::cita_dto::CitaResponse;
use crate::models::auto::Auto;

/// Request para dar de alta un auto en el catálogo
///
/// La imagen se sube por un colaborador externo; aquí solo viaja su ruta.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAutoRequest {
    pub marca: String,
    pub modelo: String,
    pub precio: Decimal,
    pub descripcion: Option<String>,
    pub imagen_path: String,
}

/// Response de auto para la API
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoResponse {
    pub id: i64,
    pub marca: String,
    pub modelo: String,
    pub precio: Decimal,
    pub descripcion: Option<String>,
    pub imagen_path: String,
    pub disponible: bool,
    pub created_at: String,
}

impl From<Auto> for AutoResponse {
    fn from(auto: Auto) -> Self {
        Self {
            id: auto.id,
            marca: auto.marca,
            modelo: auto.modelo,
            precio: auto.precio,
            descripcion: auto.descripcion,
            imagen_path: auto.imagen_path,
            disponible: auto.disponible,
            created_at: auto.created_at.to_rfc3339(),
        }
    }
}

/// Response de la venta en cascada: el auto vendido más las citas
/// que la transacción dejó canceladas
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VenderAutoResponse {
    pub mensaje: String,
    pub auto: AutoResponse,
    pub citas_canceladas: Vec<CitaResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_auto_response_wire_shape() {
        let auto = Auto {
            id: 3,
            marca: "Toyota".to_string(),
            modelo: "Corolla".to_string(),
            precio: Decimal::from(15000),
            descripcion: None,
            imagen_path: "/img/1.png".to_string(),
            disponible: true,
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(AutoResponse::from(auto)).unwrap();
        assert_eq!(value["id"], 3);
        assert_eq!(value["imagenPath"], "/img/1.png");
        assert_eq!(value["disponible"], true);
        assert!(value.get("createdAt").is_some());
        assert!(value.get("imagen_path").is_none());
    }

    #[test]
    fn test_create_request_acepta_camel_case() {
        let body = r#"{"marca":"Toyota","modelo":"Corolla","precio":15000,"imagenPath":"/img/1.png"}"#;
        let request: CreateAutoRequest = serde_json::from_str(body).unwrap();
        assert_eq!(request.marca, "Toyota");
        assert_eq!(request.imagen_path, "/img/1.png");
        assert!(request.descripcion.is_none());
    }
}
