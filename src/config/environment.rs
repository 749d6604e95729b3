//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use std::env;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub port: u16,
    pub host: String,
    pub jwt_secret: String,
    pub jwt_expiration: u64,
    /// Ruta del artefacto de snapshot de citas (reporte denormalizado)
    pub snapshot_path: String,
}

impl EnvironmentConfig {
    /// Cargar la configuración desde el entorno, con defaults de desarrollo
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            jwt_secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "cambiame_a_un_valor_seguro".to_string()),
            jwt_expiration: env::var("JWT_EXPIRATION")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(86400),
            snapshot_path: env::var("SNAPSHOT_PATH")
                .unwrap_or_else(|_| "data/citas.json".to_string()),
        }
    }
}
