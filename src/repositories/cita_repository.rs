//! Repositorio de citas
//!
//! Acceso a la tabla `citas`. La creación corre en una transacción que
//! re-verifica la disponibilidad del auto con un lock compartido sobre su
//! fila, de modo que no puede intercalarse con una venta en curso.

use chrono::{NaiveDate, Utc};
use sqlx::PgPool;

use crate::dto::cita_dto::CitaPendiente;
use crate::models::auto::Auto;
use crate::models::cita::{Cita, EstadoCita};
use crate::utils::errors::AppError;

pub struct CitaRepository {
    pool: PgPool,
}

impl CitaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insertar una cita `pendiente` contra un auto disponible.
    ///
    /// El SELECT ... FOR SHARE convive con otras creaciones de citas pero
    /// entra en conflicto con el UPDATE de la venta en cascada, así que la
    /// disponibilidad observada sigue siendo válida al hacer el INSERT.
    pub async fn create_pendiente(
        &self,
        user_id: i64,
        auto_id: i64,
        fecha: NaiveDate,
        comentario: Option<String>,
    ) -> Result<Cita, AppError> {
        let mut tx = self.pool.begin().await?;

        let auto = sqlx::query_as::<_, Auto>("SELECT * FROM autos WHERE id = $1 FOR SHARE")
            .bind(auto_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Auto con id={} no encontrado", auto_id)))?;

        if !auto.disponible {
            return Err(AppError::Conflict("El auto ya no está disponible".to_string()));
        }

        let cita = sqlx::query_as::<_, Cita>(
            r#"
            INSERT INTO citas (user_id, auto_id, fecha, comentario, estado, created_at)
            VALUES ($1, $2, $3, $4, 'pendiente', $5)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(auto_id)
        .bind(fecha)
        .bind(comentario)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(cita)
    }

    /// Cambiar el estado de una cita.
    ///
    /// `cancelada` es terminal: reabrir una cita cancelada devuelve
    /// Conflict; volver a cancelarla es idempotente y no falla.
    pub async fn set_estado(&self, cita_id: i64, estado: EstadoCita) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE citas SET estado = $2 WHERE id = $1 AND estado != 'cancelada'",
        )
        .bind(cita_id)
        .bind(estado.as_str())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() > 0 {
            return Ok(());
        }

        let actual: Option<(String,)> =
            sqlx::query_as("SELECT estado FROM citas WHERE id = $1")
                .bind(cita_id)
                .fetch_optional(&self.pool)
                .await?;

        match actual {
            None => Err(AppError::NotFound(format!(
                "Cita con id={} no encontrada",
                cita_id
            ))),
            // Ya estaba cancelada: cancelar de nuevo es un no-op
            Some(_) if estado.es_terminal() => Ok(()),
            Some(_) => Err(AppError::Conflict(
                "Una cita cancelada no puede reabrirse".to_string(),
            )),
        }
    }

    /// Citas pendientes con nombre y contacto del cliente, para el triage
    /// del panel de administración
    pub async fn list_pendientes(&self) -> Result<Vec<CitaPendiente>, AppError> {
        let citas = sqlx::query_as::<_, CitaPendiente>(
            r#"
            SELECT c.id, u.nombre AS cliente, u.correo AS contacto, c.fecha, c.comentario
            FROM citas c
            JOIN users u ON c.user_id = u.id
            WHERE c.estado = 'pendiente'
            ORDER BY c.fecha ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(citas)
    }
}
