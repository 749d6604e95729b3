//! Servicio de reporte de citas
//!
//! Materializa un snapshot denormalizado (citas × users × autos) en un
//! archivo JSON para consumo del panel de administración. El snapshot es
//! una copia descartable: se regenera completo en cada refresh y nunca lo
//! lee ningún camino de escritura; la base de datos sigue siendo la
//! fuente de verdad.

use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use tracing::{error, info, warn};

use crate::utils::errors::AppError;

/// Fila del reporte denormalizado de citas
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CitaReporte {
    pub cita_id: i64,
    pub fecha: NaiveDate,
    pub comentario: Option<String>,
    pub estado: String,
    pub fecha_creacion: DateTime<Utc>,
    pub user_id: i64,
    pub nombre_usuario: String,
    pub correo_usuario: String,
    pub auto_id: i64,
    pub descripcion_auto: String,
    pub precio_auto: Decimal,
}

#[derive(Clone)]
pub struct ReporteService {
    pool: PgPool,
    snapshot_path: PathBuf,
}

impl ReporteService {
    pub fn new(pool: PgPool, snapshot_path: impl Into<PathBuf>) -> Self {
        Self {
            pool,
            snapshot_path: snapshot_path.into(),
        }
    }

    /// Regenerar el snapshot completo, reemplazando el contenido anterior
    pub async fn refresh_snapshot(&self) -> Result<usize, AppError> {
        let filas = sqlx::query_as::<_, CitaReporte>(
            r#"
            SELECT
                c.id AS cita_id,
                c.fecha,
                c.comentario,
                c.estado,
                c.created_at AS fecha_creacion,
                u.id AS user_id,
                u.nombre AS nombre_usuario,
                u.correo AS correo_usuario,
                a.id AS auto_id,
                a.marca || ' ' || a.modelo AS descripcion_auto,
                a.precio AS precio_auto
            FROM citas c
            INNER JOIN users u ON c.user_id = u.id
            INNER JOIN autos a ON c.auto_id = a.id
            ORDER BY c.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let contenido = serde_json::to_vec_pretty(&filas)
            .map_err(|e| AppError::Internal(format!("Error serializando reporte: {}", e)))?;

        if let Some(dir) = self.snapshot_path.parent() {
            if !dir.as_os_str().is_empty() {
                tokio::fs::create_dir_all(dir)
                    .await
                    .map_err(|e| AppError::Internal(format!("Error creando directorio: {}", e)))?;
            }
        }

        tokio::fs::write(&self.snapshot_path, contenido)
            .await
            .map_err(|e| AppError::Internal(format!("Error escribiendo snapshot: {}", e)))?;

        Ok(filas.len())
    }

    /// Disparar un refresh en background sin bloquear al request que lo
    /// originó. Los fallos solo se loggean: un snapshot viejo es
    /// aceptable, una operación de cliente fallida no.
    pub fn spawn_refresh(&self) {
        let service = self.clone();
        tokio::spawn(async move {
            match service.refresh_snapshot().await {
                Ok(filas) => info!("✔ Snapshot de citas regenerado ({} filas)", filas),
                Err(e) => error!("Error al regenerar snapshot de citas: {}", e),
            }
        });
    }

    /// Leer el último snapshot escrito. Si el artefacto no existe o no se
    /// puede parsear devuelve una lista vacía, nunca un error.
    pub async fn read_snapshot(&self) -> Vec<CitaReporte> {
        let bytes = match tokio::fs::read(&self.snapshot_path).await {
            Ok(bytes) => bytes,
            Err(_) => return Vec::new(),
        };

        match serde_json::from_slice(&bytes) {
            Ok(filas) => filas,
            Err(e) => {
                warn!("Snapshot de citas ilegible, se devuelve vacío: {}", e);
                Vec::new()
            }
        }
    }
}
