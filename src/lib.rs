//! Backend de concesionaria: catálogo de autos y agenda de citas
//!
//! La librería expone el router completo vía [`create_app`] para que los
//! tests de integración y el binario compartan el mismo wiring.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::Router;
use tower_http::trace::TraceLayer;

use middleware::cors::cors_middleware;
use state::AppState;

/// Construir el router completo de la aplicación
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(routes::auto_routes::create_auto_router())
        .merge(routes::cita_routes::create_cita_router())
        .merge(routes::auth_routes::create_auth_router())
        .merge(routes::reporte_routes::create_reporte_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors_middleware())
        .with_state(state)
}
