//! DTOs de Cita
//!
//! Requests y responses de la API de citas.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::cita::Cita;

/// Request para agendar una cita de inspección
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCitaRequest {
    pub auto_id: i64,
    pub fecha: String,
    pub comentario: Option<String>,
}

/// Request para cambiar el estado de una cita
#[derive(Debug, Deserialize)]
pub struct UpdateEstadoRequest {
    pub estado: String,
}

/// Response de cita para la API
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CitaResponse {
    pub id: i64,
    pub user_id: i64,
    pub auto_id: i64,
    pub fecha: NaiveDate,
    pub comentario: Option<String>,
    pub estado: String,
    pub created_at: String,
}

impl From<Cita> for CitaResponse {
    fn from(cita: Cita) -> Self {
        Self {
            id: cita.id,
            user_id: cita.user_id,
            auto_id: cita.auto_id,
            fecha: cita.fecha,
            comentario: cita.comentario,
            estado: cita.estado,
            created_at: cita.created_at.to_rfc3339(),
        }
    }
}

/// Response al agendar una cita
#[derive(Debug, Serialize)]
pub struct CreateCitaResponse {
    pub mensaje: String,
    pub cita: CitaResponse,
}

/// Fila del listado de citas pendientes para triage del admin
/// (cita unida con nombre y contacto del cliente)
#[derive(Debug, Serialize, FromRow)]
pub struct CitaPendiente {
    pub id: i64,
    pub cliente: String,
    pub contacto: String,
    pub fecha: NaiveDate,
    pub comentario: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_cita_response_wire_shape() {
        let cita = Cita {
            id: 9,
            user_id: 2,
            auto_id: 3,
            fecha: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            comentario: Some("por la tarde".to_string()),
            estado: "pendiente".to_string(),
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(CitaResponse::from(cita)).unwrap();
        assert_eq!(value["userId"], 2);
        assert_eq!(value["autoId"], 3);
        assert_eq!(value["fecha"], "2025-01-10");
        assert_eq!(value["estado"], "pendiente");
    }

    #[test]
    fn test_create_request_comentario_opcional() {
        let body = r#"{"autoId": 3, "fecha": "2025-01-10"}"#;
        let request: CreateCitaRequest = serde_json::from_str(body).unwrap();
        assert_eq!(request.auto_id, 3);
        assert!(request.comentario.is_none());
    }
}
