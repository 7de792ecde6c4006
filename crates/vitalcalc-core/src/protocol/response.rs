//! Response bodies.

use serde::Serialize;

/// `{"BMI": value}`
#[derive(Debug, Serialize)]
pub struct BmiResponse {
    #[serde(rename = "BMI")]
    pub bmi: f64,
}

/// `{"BMR": value}`
#[derive(Debug, Serialize)]
pub struct BmrResponse {
    #[serde(rename = "BMR")]
    pub bmr: f64,
}

/// `{"error": message}`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

