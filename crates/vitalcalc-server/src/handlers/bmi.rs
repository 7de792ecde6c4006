use axum::Json;

use vitalcalc_core::protocol::{BmiRequest, BmiResponse};

use super::extract::JsonBody;
use crate::error::ApiError;

/// `POST /bmi`
pub async fn bmi(JsonBody(req): JsonBody<BmiRequest>) -> Result<Json<BmiResponse>, ApiError> {
    let input = req.validate()?;
    let bmi = input.compute()?;
    tracing::debug!(height = input.height, weight = input.weight, bmi, "bmi computed");
    Ok(Json(BmiResponse { bmi }))
}
