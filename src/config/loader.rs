use std::path::Path;

use super::DriverConfig;
use crate::errors::{Error, Result};
use crate::io::read_file;

pub const CONFIG_FILE_NAME: &str = "secbadge.toml";

/// Parse a TOML document. Missing keys take their defaults.
pub fn parse_config(contents: &str) -> std::result::Result<DriverConfig, String> {
    toml::from_str::<DriverConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))
}

/// Load configuration from an explicit file.
pub fn load_config_from_path(path: &Path) -> Result<DriverConfig> {
    let contents = read_file(path)?;
    parse_config(&contents).map_err(|message| Error::config(path, message))
}

/// Load `secbadge.toml` from `dir`, falling back to defaults.
///
/// A missing file is silent; an unreadable or malformed one logs a warning.
pub fn load_config(dir: &Path) -> DriverConfig {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.is_file() {
        return DriverConfig::default();
    }

    match load_config_from_path(&path) {
        Ok(config) => {
            tracing::debug!("Loaded config from {}", path.display());
            config
        }
        Err(e) => {
            tracing::warn!("{}. Using defaults.", e);
            DriverConfig::default()
        }
    }
}
