use axum::Json;

use vitalcalc_core::protocol::{BmrRequest, BmrResponse};

use super::extract::JsonBody;
use crate::error::ApiError;

/// `POST /bmr`
pub async fn bmr(JsonBody(req): JsonBody<BmrRequest>) -> Result<Json<BmrResponse>, ApiError> {
    let input = req.validate()?;
    let bmr = input.compute()?;
    tracing::debug!(
        height = input.height,
        weight = input.weight,
        age = input.age,
        gender = ?input.gender,
        bmr,
        "bmr computed"
    );
    Ok(Json(BmrResponse { bmr }))
}
