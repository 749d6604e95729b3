//! Middleware de CORS

use tower_http::cors::CorsLayer;

/// CORS permisivo - solo para desarrollo
pub fn cors_middleware() -> CorsLayer {
    CorsLayer::very_permissive()
}
