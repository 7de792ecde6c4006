//! Typed request bodies and their validation.

use std::str::FromStr;

use serde::Deserialize;

use crate::calc;
use crate::error::{Result, VitalError};

/// Biological sex used by the BMR offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl FromStr for Gender {
    type Err = VitalError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("male") {
            Ok(Gender::Male)
        } else if s.eq_ignore_ascii_case("female") {
            Ok(Gender::Female)
        } else {
            Err(VitalError::InvalidInput)
        }
    }
}

/// Values that can be "falsy" (zero number, empty string).
trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

/// Results that do not fit a JSON number (inf/NaN) are rejected.
fn finite(value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(VitalError::InvalidInput)
    }
}

fn required<T: Truthy>(field: Option<T>) -> Result<T> {
    field.filter(Truthy::is_truthy).ok_or(VitalError::InvalidInput)
}

/// `POST /bmi` body.
#[derive(Debug, Default, Deserialize)]
pub struct BmiRequest {
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub weight: Option<f64>,
}

/// Validated BMI input (meters, kilograms).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiInput {
    pub height: f64,
    pub weight: f64,
}

impl BmiRequest {
    pub fn validate(self) -> Result<BmiInput> {
        Ok(BmiInput {
            height: required(self.height)?,
            weight: required(self.weight)?,
        })
    }
}

impl BmiInput {
    /// BMI rounded to two decimals.
    pub fn compute(&self) -> Result<f64> {
        finite(calc::calculate_bmi(self.height, self.weight)).map(|bmi| calc::round_to(bmi, 2))
    }
}

/// `POST /bmr` body.
#[derive(Debug, Default, Deserialize)]
pub struct BmrRequest {
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub age: Option<f64>,
    #[serde(default)]
    pub gender: Option<String>,
}

/// Validated BMR input (meters, kilograms, years).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmrInput {
    pub height: f64,
    pub weight: f64,
    pub age: f64,
    pub gender: Gender,
}

impl BmrRequest {
    pub fn validate(self) -> Result<BmrInput> {
        let height = required(self.height)?;
        let weight = required(self.weight)?;
        let age = required(self.age)?;
        let gender = required(self.gender)?.parse::<Gender>()?;
        Ok(BmrInput {
            height,
            weight,
            age,
            gender,
        })
    }
}

impl BmrInput {
    /// BMR rounded to two decimals.
    pub fn compute(&self) -> Result<f64> {
        finite(calc::calculate_bmr(self.height, self.weight, self.age, self.gender))
            .map(|bmr| calc::round_to(bmr, 2))
    }
}
