//! Extracción de identidad por request
//!
//! La identidad (id + rol) viaja en el JWT del header Authorization y se
//! pasa explícitamente a cada controller; ningún handler lee estado de
//! sesión ambiente.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::models::user::{Identity, UserRole};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::{verify_token, JwtConfig};

/// Usuario autenticado del request actual
pub struct AuthUser(pub Identity);

impl AuthUser {
    /// Exigir rol admin
    pub fn require_admin(&self) -> Result<&Identity, AppError> {
        if self.0.rol != UserRole::Admin {
            return Err(AppError::Forbidden("Acceso denegado.".to_string()));
        }
        Ok(&self.0)
    }
}

#[axum::async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| AppError::Unauthorized("Debes iniciar sesión primero.".to_string()))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::Unauthorized("Debes iniciar sesión primero.".to_string()))?;

        let claims = verify_token(token, &JwtConfig::from(&state.config))?;

        let user_id = claims
            .sub
            .parse::<i64>()
            .map_err(|_| AppError::Jwt("Token inválido: sub no numérico".to_string()))?;

        let rol = UserRole::from_str(&claims.rol)
            .ok_or_else(|| AppError::Jwt(format!("Rol desconocido: {}", claims.rol)))?;

        Ok(AuthUser(Identity {
            user_id,
            rol,
            nombre: claims.nombre,
        }))
    }
}
