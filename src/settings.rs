//! Startup settings
//!
//! Read once before the window is created. Stored as JSON using the
//! upper-case keys of the classic engine configuration table.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_SCREEN_HEIGHT, DEFAULT_SCREEN_WIDTH, DEFAULT_WINDOW_TITLE};
use crate::error::{Error, Result};

/// Window and engine settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Settings {
    pub screen_width: u32,
    pub screen_height: u32,
    /// Fullscreen instead of a resizable window
    pub use_fullscreen: bool,
    /// Log every lifecycle call
    pub debug: bool,
    pub window_title: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            use_fullscreen: false,
            debug: false,
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
        }
    }
}

impl Settings {
    /// Parse and validate settings from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(Error::InvalidSettings(format!(
                "screen size {}x{} must be non-zero",
                self.screen_width, self.screen_height
            )));
        }
        if self.window_title.trim().is_empty() {
            return Err(Error::InvalidSettings("window title is empty".into()));
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Dump every setting to the log
    pub fn log_summary(&self) {
        log::info!("Settings:");
        log::info!("  SCREEN_WIDTH: {}", self.screen_width);
        log::info!("  SCREEN_HEIGHT: {}", self.screen_height);
        log::info!("  USE_FULLSCREEN: {}", self.use_fullscreen);
        log::info!("  DEBUG: {}", self.debug);
        log::info!("  WINDOW_TITLE: {}", self.window_title);
    }
}
