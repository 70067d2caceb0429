//! Console configuration.
//!
//! Every key is optional and falls back to [`Config::default`]. A config
//! file is YAML:
//!
//! ```yaml
//! default_page_size: 20
//! max_page_size: 200
//! page_window: 7
//! output: text
//! default_user: u-003
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConsoleError, Result};
use crate::output::OutputMode;

/// Smallest page window that still fits first, current and last page with
/// their neighbours.
pub const MIN_PAGE_WINDOW: usize = flightdesk_query::DEFAULT_MAX_VISIBLE;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Page size when a list doesn't ask for one.
    pub default_page_size: usize,
    /// Largest page size a list may ask for.
    pub max_page_size: usize,
    /// Page count above which the pagination bar collapses with ellipses.
    pub page_window: usize,
    /// Output mode when `--output` isn't given.
    pub output: OutputMode,
    /// User id commands run as when `--as` isn't given.
    pub default_user: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_page_size: flightdesk_query::DEFAULT_PAGE_SIZE,
            max_page_size: 100,
            page_window: MIN_PAGE_WINDOW,
            output: OutputMode::Auto,
            default_user: "u-001".to_string(),
        }
    }
}

impl Config {
    /// Parses and validates YAML config text.
    pub fn from_yaml(text: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as an empty map.
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config =
            serde_yaml::from_str(text).map_err(|e| ConsoleError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ConsoleError::Config(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_yaml(&text).map_err(|e| match e {
            ConsoleError::Config(msg) => ConsoleError::Config(format!("{}: {msg}", path.display())),
            other => other,
        })?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Loads `path` when given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_page_size == 0 {
            return Err(ConsoleError::Config(
                "default_page_size must be at least 1".to_string(),
            ));
        }
        if self.max_page_size == 0 {
            return Err(ConsoleError::Config(
                "max_page_size must be at least 1".to_string(),
            ));
        }
        if self.default_page_size > self.max_page_size {
            return Err(ConsoleError::Config(format!(
                "default_page_size {} exceeds max_page_size {}",
                self.default_page_size, self.max_page_size
            )));
        }
        if self.page_window < MIN_PAGE_WINDOW {
            return Err(ConsoleError::Config(format!(
                "page_window must be at least {MIN_PAGE_WINDOW}"
            )));
        }
        if self.default_user.trim().is_empty() {
            return Err(ConsoleError::Config("default_user must not be empty".to_string()));
        }
        Ok(())
    }
}
