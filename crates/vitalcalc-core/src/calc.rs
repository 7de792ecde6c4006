//! Closed-form health-metric formulas.
//!
//! Inputs are SI: height in meters, weight in kilograms, age in years.
//! Nothing here validates ranges; callers run `protocol` validation first.

use crate::protocol::Gender;

/// Centimeters per meter.
pub const CM_PER_M: f64 = 100.0;

/// Mifflin-St Jeor offset for male subjects.
pub const BMR_MALE_OFFSET: f64 = 5.0;

/// Mifflin-St Jeor offset for female subjects.
pub const BMR_FEMALE_OFFSET: f64 = -161.0;

/// Body Mass Index: weight over height squared.
pub fn calculate_bmi(height: f64, weight: f64) -> f64 {
    weight / (height * height)
}

/// Basal Metabolic Rate (kcal/day) using the Mifflin-St Jeor equation.
pub fn calculate_bmr(height: f64, weight: f64, age: f64, gender: Gender) -> f64 {
    let height_cm = height * CM_PER_M;
    10.0 * weight + 6.25 * height_cm - 5.0 * age + gender_offset(gender)
}

fn gender_offset(gender: Gender) -> f64 {
    match gender {
        Gender::Male => BMR_MALE_OFFSET,
        Gender::Female => BMR_FEMALE_OFFSET,
    }
}

/// Round to `places` decimal digits, ties to even on the exact decimal
/// expansion of `value`. Never scales, so large finite values stay finite.
pub fn round_to(value: f64, places: usize) -> f64 {
    format!("{value:.places$}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn bmi_matches_reference() {
        assert!(close(calculate_bmi(2.0, 100.0), 25.0));
        assert!(close(calculate_bmi(1.8, 75.0), 75.0 / 3.24));
    }

    #[test]
    fn bmr_gender_offsets_differ_by_166() {
        let m = calculate_bmr(1.8, 75.0, 30.0, Gender::Male);
        let f = calculate_bmr(1.8, 75.0, 30.0, Gender::Female);
        assert!(close(m, 1730.0));
        assert!(close(m - f, 166.0));
    }

    #[test]
    fn round_to_two_places() {
        assert_eq!(round_to(23.148148, 2), 23.15);
        assert_eq!(round_to(22.0386, 2), 22.04);
        assert_eq!(round_to(25.0, 2), 25.0);
        assert_eq!(round_to(-1.005001, 2), -1.01);
    }

    #[test]
    fn round_to_ties_go_to_even() {
        assert_eq!(round_to(10.125, 2), 10.12);
        assert_eq!(round_to(10.375, 2), 10.38);
        assert_eq!(round_to(1733.125, 2), 1733.12);
        assert_eq!(round_to(-0.125, 2), -0.12);
    }

    #[test]
    fn round_to_keeps_huge_values_finite() {
        assert_eq!(round_to(1e307, 2), 1e307);
        assert_eq!(round_to(f64::MAX, 2), f64::MAX);
        assert!(round_to(f64::INFINITY, 2).is_infinite());
    }
}
