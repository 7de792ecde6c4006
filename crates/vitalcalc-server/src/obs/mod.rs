//! Lightweight in-process metrics and per-request observation.
//!
//! Metrics are stored as atomics and rendered by the `/metrics` handler.

pub mod metrics;
pub mod middleware;

pub use metrics::ServerMetrics;
pub use middleware::observe_requests;
