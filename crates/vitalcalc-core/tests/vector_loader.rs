//! JSON test vector loader shared by the BMI/BMR vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use std::fs;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct VectorFile {
    pub vectors: Vec<TestVector>,
}

#[derive(Debug, Deserialize)]
pub struct TestVector {
    pub description: String,
    /// Raw request body, exactly as a client would send it.
    pub request: serde_json::Value,
    #[serde(default)]
    pub expect: Option<f64>,
    #[serde(default)]
    pub expect_error: Option<ExpectError>,
}

#[derive(Debug, Deserialize)]
pub struct ExpectError {
    pub code: String,
}

pub fn load(name: &str) -> VectorFile {
    let s = fs::read_to_string(format!("tests/vectors/{name}")).unwrap();
    serde_json::from_str(&s).unwrap()
}
