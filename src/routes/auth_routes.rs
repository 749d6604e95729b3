//! Rutas de autenticación

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};

use crate::controllers::auth_controller::AuthController;
use crate::dto::auth_dto::{LoginRequest, LoginResponse, RegisterRequest};
use crate::middleware::json::AppJson;
use crate::models::user::UserRole;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::JwtConfig;

pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
}

/// POST /api/auth/register
async fn register(
    State(state): State<AppState>,
    AppJson(request): AppJson<RegisterRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError> {
    let controller = AuthController::new(state.pool.clone());
    controller.register(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "mensaje": "Registro exitoso." })),
    ))
}

/// POST /api/auth/login
///
/// El primer acceso administrativo regenera el snapshot de citas, igual
/// que tras cada venta o cita nueva.
async fn login(
    State(state): State<AppState>,
    AppJson(request): AppJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let controller = AuthController::new(state.pool.clone());
    let jwt_config = JwtConfig::from(&state.config);
    let (response, rol) = controller.login(request, &jwt_config).await?;

    if rol == UserRole::Admin {
        state.reportes.spawn_refresh();
    }

    Ok(Json(response))
}
