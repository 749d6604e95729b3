//! Rutas del catálogo de autos

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};

use crate::controllers::auto_controller::AutoController;
use crate::dto::auto_dto::{AutoResponse, CreateAutoRequest, VenderAutoResponse};
use crate::middleware::auth::AuthUser;
use crate::middleware::json::AppJson;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_auto_router() -> Router<AppState> {
    Router::new()
        .route("/api/autos", get(list_autos).post(create_auto))
        .route("/api/autos/:id", axum::routing::delete(delete_auto))
        .route("/api/autos/:id/vender", put(vender_auto))
}

/// GET /api/autos - público, incluye los no disponibles
async fn list_autos(
    State(state): State<AppState>,
) -> Result<Json<Vec<AutoResponse>>, AppError> {
    let controller = AutoController::new(state.pool.clone());
    let autos = controller.list().await?;
    Ok(Json(autos))
}

/// POST /api/autos - solo admin
async fn create_auto(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(request): AppJson<CreateAutoRequest>,
) -> Result<(StatusCode, Json<AutoResponse>), AppError> {
    auth.require_admin()?;

    let controller = AutoController::new(state.pool.clone());
    let auto = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(auto)))
}

/// PUT /api/autos/:id/vender - solo admin
///
/// Venta en cascada; si la transacción confirma, dispara el refresh del
/// snapshot en background.
async fn vender_auto(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<VenderAutoResponse>, AppError> {
    auth.require_admin()?;

    let controller = AutoController::new(state.pool.clone());
    let response = controller.vender(id).await?;

    state.reportes.spawn_refresh();

    Ok(Json(response))
}

/// DELETE /api/autos/:id - solo admin
async fn delete_auto(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    auth.require_admin()?;

    let controller = AutoController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "mensaje": "Auto eliminado correctamente."
    })))
}
