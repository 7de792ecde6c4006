//! Request/response schemas for the HTTP surface.
//!
//! - Requests carry every field as `Option` so a missing field and a wrong
//!   shape are told apart only by serde; validation then applies the
//!   truthiness rule (null, `0`, and `""` all count as missing).
//! - Responses serialize with the exact upper-case keys clients expect.

use serde::de::DeserializeOwned;

use crate::error::{Result, VitalError};

pub mod request;
pub mod response;

pub use request::{BmiInput, BmiRequest, BmrInput, BmrRequest, Gender};
pub use response::{BmiResponse, BmrResponse, ErrorBody};

/// Decode a request body. Only a JSON object is accepted; anything else,
/// including a field of the wrong JSON type, is `InvalidInput`.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|_| VitalError::InvalidInput)?;
    if !value.is_object() {
        return Err(VitalError::InvalidInput);
    }
    serde_json::from_value(value).map_err(|e| {
        tracing::debug!(error = %e, "request body does not match schema");
        VitalError::InvalidInput
    })
}
