//! vitalcalc core: health-metric formulas, request schemas, and the shared error type.
//!
//! This crate carries no transport or runtime dependencies; the HTTP server
//! and any other front end build on the pure functions and typed schemas here.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here.
//! Bad input surfaces as `VitalError::InvalidInput` instead of crashing the caller.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod calc;
pub mod error;
pub mod protocol;

/// Shared result type.
pub use error::{Result, VitalError};
