//! Rutas del reporte de citas

use axum::{extract::State, routing::get, Json, Router};

use crate::middleware::auth::AuthUser;
use crate::services::reporte_service::CitaReporte;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_reporte_router() -> Router<AppState> {
    Router::new().route("/api/citas-json", get(citas_json))
}

/// GET /api/citas-json - solo admin
///
/// Devuelve el último snapshot escrito; si nunca se generó responde una
/// lista vacía, nunca un error.
async fn citas_json(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<CitaReporte>>, AppError> {
    auth.require_admin()?;

    Ok(Json(state.reportes.read_snapshot().await))
}
