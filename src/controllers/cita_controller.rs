//! Controller de citas
//!
//! Alta de citas (solo clientes, solo autos disponibles), cambio de
//! estado y listado de pendientes para el panel de administración.

use sqlx::PgPool;

use crate::dto::cita_dto::{CitaPendiente, CitaResponse, CreateCitaRequest};
use crate::models::cita::EstadoCita;
use crate::models::user::{Identity, UserRole};
use crate::repositories::cita_repository::CitaRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::validate_fecha;

pub struct CitaController {
    repository: CitaRepository,
}

impl CitaController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CitaRepository::new(pool),
        }
    }

    /// Agendar una cita `pendiente` contra un auto disponible
    pub async fn create(
        &self,
        identity: &Identity,
        request: CreateCitaRequest,
    ) -> Result<CitaResponse, AppError> {
        if identity.rol != UserRole::Cliente {
            return Err(AppError::Forbidden(
                "Sólo clientes pueden agendar citas.".to_string(),
            ));
        }

        let fecha = validate_fecha(&request.fecha)?;

        let cita = self
            .repository
            .create_pendiente(
                identity.user_id,
                request.auto_id,
                fecha,
                request.comentario.filter(|c| !c.trim().is_empty()),
            )
            .await?;

        Ok(CitaResponse::from(cita))
    }

    /// Cambiar el estado de una cita a pendiente/confirmada/cancelada.
    /// `cancelada` es terminal; el repositorio rechaza reaperturas.
    pub async fn set_estado(&self, cita_id: i64, estado: &str) -> Result<(), AppError> {
        let estado = EstadoCita::from_str(estado)
            .ok_or_else(|| AppError::Validation("Estado inválido.".to_string()))?;

        self.repository.set_estado(cita_id, estado).await
    }

    pub async fn list_pendientes(&self) -> Result<Vec<CitaPendiente>, AppError> {
        self.repository.list_pendientes().await
    }
}
