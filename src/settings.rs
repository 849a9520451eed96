//! Runtime settings for the `href_kit` binary
//!
//! Sources are layered in order: built-in defaults, an optional
//! `href_kit.toml` in the working directory (or an explicit file), then
//! `HREF_KIT_*` environment variables, e.g. `HREF_KIT_LOGGING__LEVEL=debug`.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "href_kit";
/// Prefix of environment overrides
pub const ENV_PREFIX: &str = "HREF_KIT";

/// Default dictionary for random strings
pub const DEFAULT_DICT: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub logging: LoggingConfig,

    /// Characters `random-string` draws from when none are given
    pub random_dict: String,
}

/// Logging output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub level: String,

    /// Write to a timestamped file in this directory instead of stderr
    pub log_dir: Option<String>,

    /// Colorize stderr output
    pub ansi: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            random_dict: DEFAULT_DICT.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            log_dir: None,
            ansi: true,
        }
    }
}

impl Settings {
    /// Loads settings, requiring `path` to exist when one is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = ::config::Config::builder()
            .add_source(::config::File::with_name(DEFAULT_CONFIG_FILE).required(false));

        if let Some(path) = path {
            debug!("Loading settings from {}", path.display());
            builder = builder.add_source(::config::File::from(path).required(true));
        }

        let settings = builder
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}
