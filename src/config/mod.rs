//! Driver configuration.
//!
//! The badge itself is not configurable and is always written to
//! `security_badge.svg`. The optional `secbadge.toml` only controls how much
//! of the markup is echoed to the console:
//!
//! ```toml
//! preview_chars = 120
//! ```

mod loader;

pub use loader::{load_config, load_config_from_path, parse_config, CONFIG_FILE_NAME};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DriverConfig {
    /// Badge destination, relative to the working directory. Not read from
    /// the config file.
    #[serde(skip, default = "default_output")]
    pub output: PathBuf,

    /// Number of characters of markup echoed after writing
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            preview_chars: default_preview_chars(),
        }
    }
}

fn default_output() -> PathBuf {
    PathBuf::from("security_badge.svg")
}

fn default_preview_chars() -> usize {
    200
}
