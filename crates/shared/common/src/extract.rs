//! JSON body extractors.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use domain::DomainError;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON extractor that automatically validates the payload.
///
/// Malformed bodies are reported as 400 instead of axum's default 422.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let JsonBody(value) = JsonBody::<T>::from_request(req, state).await?;

        // Validate
        value
            .validate()
            .map_err(|e| AppError::from(DomainError::from(e)))?;

        Ok(ValidatedJson(value))
    }
}

/// JSON extractor that leaves validation to the service layer.
///
/// Used where the service must look the target up before judging the input.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        Ok(JsonBody(value))
    }
}
