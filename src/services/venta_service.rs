//! Servicio de venta en cascada
//!
//! Marca un auto como vendido y cancela sus citas abiertas en una sola
//! transacción. Invariante: si `disponible = false`, toda cita que
//! referencia al auto está `cancelada` — ningún otro camino del código
//! baja el flag.

use sqlx::PgPool;

use crate::models::auto::Auto;
use crate::models::cita::Cita;
use crate::utils::errors::AppError;

pub struct VentaService {
    pool: PgPool,
}

impl VentaService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Ejecutar la venta: disponible -> false y cancelación de toda cita
    /// no cancelada del auto, todo o nada.
    ///
    /// El UPDATE sobre la fila del auto toma su lock de fila, así que una
    /// creación de cita concurrente (que la lee con FOR SHARE) queda
    /// ordenada antes o después de la venta completa, nunca en medio.
    pub async fn vender_auto(&self, auto_id: i64) -> Result<(Auto, Vec<Cita>), AppError> {
        let mut tx = self.pool.begin().await?;

        let auto = sqlx::query_as::<_, Auto>(
            "UPDATE autos SET disponible = FALSE WHERE id = $1 RETURNING *",
        )
        .bind(auto_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::Transaction(format!("Error al marcar auto vendido: {}", e)))?
        .ok_or_else(|| AppError::NotFound(format!("Auto con id={} no encontrado", auto_id)))?;

        sqlx::query(
            "UPDATE citas SET estado = 'cancelada' WHERE auto_id = $1 AND estado != 'cancelada'",
        )
        .bind(auto_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::Transaction(format!("Error al cancelar citas: {}", e)))?;

        let citas_canceladas = sqlx::query_as::<_, Cita>(
            "SELECT * FROM citas WHERE auto_id = $1 AND estado = 'cancelada'",
        )
        .bind(auto_id)
        .fetch_all(&mut *tx)
        .await
        .map_err(|e| AppError::Transaction(format!("Error al leer citas canceladas: {}", e)))?;

        tx.commit()
            .await
            .map_err(|e| AppError::Transaction(format!("Error al confirmar la venta: {}", e)))?;

        Ok((auto, citas_canceladas))
    }
}
