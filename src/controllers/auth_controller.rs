//! Controller de autenticación
//!
//! Registro y login. El hash de contraseña corre en el pool de blocking
//! de tokio: bcrypt es deliberadamente lento y no debe ocupar un worker
//! async.

use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::PgPool;

use crate::dto::auth_dto::{LoginRequest, LoginResponse, RegisterRequest};
use crate::models::user::UserRole;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::AppError;
use crate::utils::jwt::{generate_token, JwtConfig};
use crate::utils::validation::validate_not_empty;

pub struct AuthController {
    repository: UserRepository,
}

impl AuthController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: UserRepository::new(pool),
        }
    }

    /// Registrar un usuario nuevo con rol `cliente`
    pub async fn register(&self, request: RegisterRequest) -> Result<(), AppError> {
        validate_not_empty(&request.nombre, "nombre")?;
        validate_not_empty(&request.correo, "correo")?;
        validate_not_empty(&request.contrasena, "contrasena")?;

        if !request.correo.contains('@') {
            return Err(AppError::Validation("Correo inválido.".to_string()));
        }

        if self.repository.correo_exists(&request.correo).await? {
            return Err(AppError::Conflict("Ese correo ya está registrado.".to_string()));
        }

        let contrasena = request.contrasena;
        let contrasena_hash = tokio::task::spawn_blocking(move || hash(contrasena, DEFAULT_COST))
            .await
            .map_err(|e| AppError::Internal(format!("Error en tarea de hashing: {}", e)))?
            .map_err(|e| AppError::Hash(e.to_string()))?;

        self.repository
            .create(request.nombre, request.correo, contrasena_hash)
            .await?;

        Ok(())
    }

    /// Login: devuelve el token con la identidad y el rol del usuario,
    /// para que el caller dispare el refresh del snapshot cuando entra
    /// un admin
    pub async fn login(
        &self,
        request: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<(LoginResponse, UserRole), AppError> {
        let user = self
            .repository
            .find_by_correo(&request.correo)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Credenciales incorrectas.".to_string()))?;

        let contrasena = request.contrasena;
        let hash_guardado = user.contrasena_hash.clone();
        let coincide = tokio::task::spawn_blocking(move || verify(contrasena, &hash_guardado))
            .await
            .map_err(|e| AppError::Internal(format!("Error en tarea de verificación: {}", e)))?
            .map_err(|e| AppError::Hash(e.to_string()))?;

        if !coincide {
            return Err(AppError::Unauthorized("Credenciales incorrectas.".to_string()));
        }

        let rol = UserRole::from_str(&user.rol)
            .ok_or_else(|| AppError::Internal(format!("Rol desconocido: {}", user.rol)))?;

        let token = generate_token(user.id, rol.as_str(), &user.nombre, jwt_config)?;

        Ok((
            LoginResponse {
                token,
                rol: rol.as_str().to_string(),
                nombre: user.nombre,
            },
            rol,
        ))
    }
}
