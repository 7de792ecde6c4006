//! Server config loader (strict parsing).

pub mod schema;

use std::{fs, io::ErrorKind};

use vitalcalc_core::error::{Result, VitalError};

pub use schema::{MetricsSection, ServerConfig, ServerSection};

/// Used when `VITALCALC_CONFIG` is unset.
pub const DEFAULT_PATH: &str = "vitalcalc.yaml";

pub fn load_from_file(path: &str) -> Result<ServerConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| VitalError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ServerConfig> {
    let cfg: ServerConfig = serde_yaml::from_str(s)
        .map_err(|e| VitalError::BadConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Like `load_from_file`, but a missing file yields the built-in defaults.
pub fn load_or_default(path: &str) -> Result<ServerConfig> {
    match fs::metadata(path) {
        Ok(_) => load_from_file(path),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!(%path, "config file not found, using defaults");
            Ok(ServerConfig::default())
        }
        Err(e) => Err(VitalError::Internal(format!("stat config failed: {e}"))),
    }
}
