mod config;

pub use config::{AudioConfig, Config, ScheduleConfig, UiConfig};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns the configuration directory, creating it if needed.
///
/// `DINCHARYA_CONFIG_DIR` wins outright. Otherwise `~/.config/dincharya[-dev]/`,
/// with the `-dev` suffix when `DINCHARYA_ENV=dev`.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("DINCHARYA_CONFIG_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("DINCHARYA_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("dincharya-dev")
            } else {
                base_dir.join("dincharya")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::SaveFailed {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(dir)
}
