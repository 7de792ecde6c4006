//! Calculation endpoints.

pub mod bmi;
pub mod bmr;
pub mod extract;
