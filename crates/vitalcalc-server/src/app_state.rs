//! Shared application state for the vitalcalc server.
//!
//! Holds only immutable config and lock-free metrics, so cloning into every
//! handler is cheap and no request ever waits on another.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::obs::ServerMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServerConfig,
    metrics: ServerMetrics,
}

impl AppState {
    pub fn new(cfg: ServerConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                metrics: ServerMetrics::default(),
            }),
        }
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn metrics(&self) -> &ServerMetrics {
        &self.inner.metrics
    }

    /// Flip readiness off; called once shutdown begins.
    pub fn start_draining(&self) {
        self.inner.metrics.set_draining();
    }

    pub fn is_draining(&self) -> bool {
        self.inner.metrics.is_draining()
    }
}
