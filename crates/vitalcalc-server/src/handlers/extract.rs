//! JSON body extractor whose every rejection is `InvalidInput`.
//!
//! axum's own `Json` rejects with its own status codes (415, 422, 413); the
//! calculation endpoints answer all of those with the single 400 body.

use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderMap},
};
use serde::de::DeserializeOwned;

use vitalcalc_core::{protocol, VitalError};

use crate::error::ApiError;

pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_json(req.headers()) {
            tracing::debug!("rejecting body without a JSON content type");
            return Err(VitalError::InvalidInput.into());
        }
        let body = Bytes::from_request(req, state).await.map_err(|e| {
            tracing::debug!(error = %e, "failed to read request body");
            ApiError(VitalError::InvalidInput)
        })?;
        Ok(Self(protocol::decode(&body)?))
    }
}

/// `application/json` or any `application/*+json`.
fn is_json(headers: &HeaderMap) -> bool {
    let Some(ct) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let mime = ct.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}
