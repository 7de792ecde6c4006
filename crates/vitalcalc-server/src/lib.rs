//! vitalcalc server library entry.
//!
//! Wires config, shared state, the calculation handlers, and ops endpoints
//! into an axum `Router`. Consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod app_state;
pub mod config;
pub mod error;
pub mod handlers;
pub mod obs;
pub mod ops;
pub mod router;
