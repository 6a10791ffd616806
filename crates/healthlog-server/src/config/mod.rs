//! Server config loader (strict parsing).

pub mod schema;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use healthlog_core::error::{HealthLogError, Result};

pub use schema::{LogSection, ServerConfig, ServerSection};

/// Default config file, looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "healthlog.yaml";

pub fn load_from_file(path: impl AsRef<Path>) -> Result<ServerConfig> {
    let path = path.as_ref();
    let s = fs::read_to_string(path).map_err(|e| {
        HealthLogError::BadConfig(format!("read config {} failed: {e}", path.display()))
    })?;
    load_from_str(&s)
}

/// Like `load_from_file`, but a missing file yields the built-in defaults.
///
/// Returns whether the file was found alongside the config.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<(ServerConfig, bool)> {
    let path = path.as_ref();
    match fs::metadata(path) {
        Ok(_) => load_from_file(path).map(|cfg| (cfg, true)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok((ServerConfig::default(), false)),
        Err(e) => Err(HealthLogError::BadConfig(format!(
            "stat config {} failed: {e}",
            path.display()
        ))),
    }
}

pub fn load_from_str(s: &str) -> Result<ServerConfig> {
    let cfg: ServerConfig = serde_yaml::from_str(s)
        .map_err(|e| HealthLogError::BadConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
