//! Viewer configuration.
//!
//! Stored as JSON under `.folio/` next to the document being viewed. Every
//! field has a default so a missing or partial file just works.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory holding viewer state, relative to the working directory.
pub const CONFIG_DIR: &str = ".folio";

/// Config file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.json";

/// Log file name inside [`CONFIG_DIR`].
pub const LOG_FILE: &str = "folio.log";

/// Viewer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Color theme name ("mocha", "latte" or "high-contrast").
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Use ASCII glyphs and borders instead of Unicode.
    #[serde(default)]
    pub ascii: bool,

    /// Animate timeline reveals. Off, entries appear as soon as they
    /// scroll into view.
    #[serde(default = "default_animate")]
    pub animate: bool,

    /// Animation tick interval in milliseconds.
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,

    /// Show the key hint footer.
    #[serde(default = "default_show_hints")]
    pub show_hints: bool,
}

fn default_theme() -> String {
    "mocha".into()
}

fn default_animate() -> bool {
    true
}

fn default_tick_rate() -> u64 {
    50
}

fn default_show_hints() -> bool {
    true
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            ascii: false,
            animate: default_animate(),
            tick_rate_ms: default_tick_rate(),
            show_hints: default_show_hints(),
        }
    }
}

impl ViewerConfig {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        serde_json::from_str(&content).map_err(ConfigError::Parse)
    }

    /// Load configuration, falling back to defaults when the file does not
    /// exist. Other errors still surface.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Ok(config) => Ok(config),
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }
        std::fs::write(path, content).map_err(ConfigError::Io)
    }
}

/// Path of the config file under `dir`.
pub fn config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_DIR).join(CONFIG_FILE)
}

/// Path of the log file under `dir`.
pub fn log_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_DIR).join(LOG_FILE)
}

/// Errors that can occur when working with configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading or writing config.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing config JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Error serializing config to JSON.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),
}
