//! Modelo de User
//!
//! Usuarios registrados del sistema. El rol viaja en el JWT y se pasa
//! explícitamente a cada controller; nunca se lee de estado ambiente.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Roles del sistema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Cliente,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Cliente => "cliente",
            UserRole::Admin => "admin",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "cliente" => Some(UserRole::Cliente),
            "admin" => Some(UserRole::Admin),
            _ => None,
        }
    }
}

/// User - mapea a la tabla users
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub nombre: String,
    pub correo: String,
    pub contrasena_hash: String,
    pub rol: String,
}

/// Identidad por-request extraída del JWT
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: i64,
    pub rol: UserRole,
    pub nombre: String,
}
