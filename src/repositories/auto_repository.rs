//! Repositorio de autos
//!
//! Acceso a la tabla `autos`. La venta (disponible -> false) NO se hace
//! aquí: pasa siempre por `services::venta_service` para que la
//! cancelación de citas viaje en la misma transacción.

use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::models::auto::Auto;
use crate::utils::errors::AppError;

pub struct AutoRepository {
    pool: PgPool,
}

impl AutoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        marca: String,
        modelo: String,
        precio: Decimal,
        descripcion: Option<String>,
        imagen_path: String,
    ) -> Result<Auto, AppError> {
        let auto = sqlx::query_as::<_, Auto>(
            r#"
            INSERT INTO autos (marca, modelo, precio, descripcion, imagen_path, disponible, created_at)
            VALUES ($1, $2, $3, $4, $5, TRUE, $6)
            RETURNING *
            "#,
        )
        .bind(marca)
        .bind(modelo)
        .bind(precio)
        .bind(descripcion)
        .bind(imagen_path)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(auto)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Auto>, AppError> {
        let auto = sqlx::query_as::<_, Auto>("SELECT * FROM autos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(auto)
    }

    /// Todos los autos, los más recientes primero. Incluye los no
    /// disponibles; el storefront filtra del lado del cliente.
    pub async fn list_all(&self) -> Result<Vec<Auto>, AppError> {
        let autos =
            sqlx::query_as::<_, Auto>("SELECT * FROM autos ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(autos)
    }

    /// Borrar un auto; sus citas caen por el ON DELETE CASCADE del schema
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM autos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Auto con id={} no encontrado", id)));
        }

        Ok(())
    }
}
