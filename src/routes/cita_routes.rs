//! Rutas de citas

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch, post},
    Json, Router,
};

use crate::controllers::cita_controller::CitaController;
use crate::dto::cita_dto::{
    CitaPendiente, CreateCitaRequest, CreateCitaResponse, UpdateEstadoRequest,
};
use crate::middleware::auth::AuthUser;
use crate::middleware::json::AppJson;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_cita_router() -> Router<AppState> {
    Router::new()
        .route("/agendar-cita", post(agendar_cita))
        .route("/api/citas-pendientes", get(citas_pendientes))
        .route("/api/citas/:id/estado", patch(actualizar_estado))
}

/// POST /agendar-cita - solo clientes
///
/// Si la cita queda insertada, dispara el refresh del snapshot en
/// background; un fallo del reporte no afecta la respuesta al cliente.
async fn agendar_cita(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(request): AppJson<CreateCitaRequest>,
) -> Result<(StatusCode, Json<CreateCitaResponse>), AppError> {
    let controller = CitaController::new(state.pool.clone());
    let cita = controller.create(&auth.0, request).await?;

    state.reportes.spawn_refresh();

    Ok((
        StatusCode::CREATED,
        Json(CreateCitaResponse {
            mensaje: "Cita agendada correctamente.".to_string(),
            cita,
        }),
    ))
}

/// GET /api/citas-pendientes - solo admin
async fn citas_pendientes(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<CitaPendiente>>, AppError> {
    auth.require_admin()?;

    let controller = CitaController::new(state.pool.clone());
    let citas = controller.list_pendientes().await?;
    Ok(Json(citas))
}

/// PATCH /api/citas/:id/estado - solo admin
///
/// Cambio puntual de estado; no pasa por la cascada y por diseño no
/// refresca el snapshot.
async fn actualizar_estado(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
    AppJson(request): AppJson<UpdateEstadoRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    auth.require_admin()?;

    let controller = CitaController::new(state.pool.clone());
    controller.set_estado(id, &request.estado).await?;
    Ok(Json(serde_json::json!({
        "mensaje": "Estado de la cita actualizado."
    })))
}
