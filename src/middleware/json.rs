//! Extractor de cuerpos JSON
//!
//! Igual que `axum::Json`, pero un cuerpo ausente, malformado o con
//! campos faltantes responde 400 con el body de error estructurado de la
//! aplicación, no el 422 plano de axum.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};

use crate::utils::errors::AppError;

pub struct AppJson<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for AppJson<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;

        Ok(AppJson(value))
    }
}
