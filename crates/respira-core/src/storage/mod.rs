mod config;

pub use config::{BreathingConfig, Config};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `~/.config/respira[-dev]/` based on RESPIRA_ENV.
///
/// Set RESPIRA_ENV=dev to use a development data directory.
///
/// # Errors
/// Returns an error if the config directory cannot be created.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("RESPIRA_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("respira-dev")
    } else {
        base_dir.join("respira")
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::LoadFailed {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(dir)
}
