//! Repositorio de usuarios

use sqlx::PgPool;

use crate::models::user::User;
use crate::utils::errors::AppError;

pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        nombre: String,
        correo: String,
        contrasena_hash: String,
    ) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (nombre, correo, contrasena_hash, rol)
            VALUES ($1, $2, $3, 'cliente')
            RETURNING *
            "#,
        )
        .bind(nombre)
        .bind(correo)
        .bind(contrasena_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn find_by_correo(&self, correo: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE correo = $1")
            .bind(correo)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    pub async fn correo_exists(&self, correo: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM users WHERE correo = $1)")
                .bind(correo)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }
}
