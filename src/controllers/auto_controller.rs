//! Controller del catálogo de autos
//!
//! CRUD del catálogo. La venta NO flipea `disponible` aquí: delega en
//! `VentaService` para que la cancelación de citas viaje en la misma
//! transacción.

use sqlx::PgPool;

use crate::dto::auto_dto::{AutoResponse, CreateAutoRequest, VenderAutoResponse};
use crate::repositories::auto_repository::AutoRepository;
use crate::services::venta_service::VentaService;
use crate::utils::errors::AppError;
use crate::utils::validation::{validate_not_empty, validate_precio};

pub struct AutoController {
    repository: AutoRepository,
    ventas: VentaService,
}

impl AutoController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: AutoRepository::new(pool.clone()),
            ventas: VentaService::new(pool),
        }
    }

    /// Todos los autos del catálogo, los más recientes primero
    pub async fn list(&self) -> Result<Vec<AutoResponse>, AppError> {
        let autos = self.repository.list_all().await?;
        Ok(autos.into_iter().map(AutoResponse::from).collect())
    }

    pub async fn create(&self, request: CreateAutoRequest) -> Result<AutoResponse, AppError> {
        validate_not_empty(&request.marca, "marca")?;
        validate_not_empty(&request.modelo, "modelo")?;
        validate_not_empty(&request.imagen_path, "imagenPath")?;
        validate_precio(request.precio)?;

        let auto = self
            .repository
            .create(
                request.marca,
                request.modelo,
                request.precio,
                request.descripcion.filter(|d| !d.trim().is_empty()),
                request.imagen_path,
            )
            .await?;

        Ok(AutoResponse::from(auto))
    }

    /// Marcar un auto como vendido, cancelando en cascada sus citas
    pub async fn vender(&self, auto_id: i64) -> Result<VenderAutoResponse, AppError> {
        let (auto, citas_canceladas) = self.ventas.vender_auto(auto_id).await?;

        Ok(VenderAutoResponse {
            mensaje: format!("Auto con id={} vendido y citas asociadas canceladas.", auto_id),
            auto: AutoResponse::from(auto),
            citas_canceladas: citas_canceladas.into_iter().map(Into::into).collect(),
        })
    }

    /// Eliminar un auto; sus citas caen por cascada en la base
    pub async fn delete(&self, auto_id: i64) -> Result<(), AppError> {
        self.repository.delete(auto_id).await
    }
}
