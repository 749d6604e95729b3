//! Modelo de Cita
//!
//! Citas de inspección agendadas por clientes contra un auto disponible.
//! `cancelada` es un estado terminal: ninguna transición sale de él.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Estado de una cita
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EstadoCita {
    Pendiente,
    Confirmada,
    Cancelada,
}

impl EstadoCita {
    pub fn as_str(&self) -> &'static str {
        match self {
            EstadoCita::Pendiente => "pendiente",
            EstadoCita::Confirmada => "confirmada",
            EstadoCita::Cancelada => "cancelada",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pendiente" => Some(EstadoCita::Pendiente),
            "confirmada" => Some(EstadoCita::Confirmada),
            "cancelada" => Some(EstadoCita::Cancelada),
            _ => None,
        }
    }

    /// `cancelada` es terminal
    pub fn es_terminal(&self) -> bool {
        matches!(self, EstadoCita::Cancelada)
    }
}

/// Cita - mapea a la tabla citas
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Cita {
    pub id: i64,
    pub user_id: i64,
    pub auto_id: i64,
    pub fecha: NaiveDate,
    pub comentario: Option<String>,
    pub estado: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estado_round_trip() {
        assert_eq!(EstadoCita::from_str("pendiente"), Some(EstadoCita::Pendiente));
        assert_eq!(EstadoCita::from_str("confirmada"), Some(EstadoCita::Confirmada));
        assert_eq!(EstadoCita::from_str("cancelada"), Some(EstadoCita::Cancelada));
        assert_eq!(EstadoCita::from_str("vendida"), None);
        assert_eq!(EstadoCita::from_str(""), None);
    }

    #[test]
    fn test_cancelada_es_terminal() {
        assert!(EstadoCita::Cancelada.es_terminal());
        assert!(!EstadoCita::Pendiente.es_terminal());
        assert!(!EstadoCita::Confirmada.es_terminal());
    }
}
