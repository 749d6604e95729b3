//! DTOs de autenticación

use serde::{Deserialize, Serialize};

/// Request de registro
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub nombre: String,
    pub correo: String,
    pub contrasena: String,
}

/// Request de login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub correo: String,
    pub contrasena: String,
}

/// Response de login: token con la identidad (id + rol) del usuario
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub rol: String,
    pub nombre: String,
}
