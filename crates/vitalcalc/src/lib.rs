//! Top-level facade crate for vitalcalc.
//!
//! Re-exports the calculation core and the HTTP server library so users can depend on a single crate.

pub mod core {
    pub use vitalcalc_core::*;
}

pub mod server {
    pub use vitalcalc_server::*;
}
