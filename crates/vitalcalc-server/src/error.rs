//! HTTP mapping for core errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use vitalcalc_core::{protocol::ErrorBody, VitalError};

/// Handler-facing error; wraps the core error so it can become a response.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub VitalError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            VitalError::InvalidInput => (StatusCode::BAD_REQUEST, self.0.to_string()),
            other => {
                tracing::error!(code = other.client_code().as_str(), error = %other, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error".to_owned())
            }
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
