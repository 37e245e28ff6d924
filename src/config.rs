use crate::error::ConfigError;
use crate::input_handler::{Rect, SizeLimits, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::state::DEFAULT_WINDOW_GEOMETRY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Shell settings (settings.json)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Bounds of a freshly opened window
    #[serde(default = "default_window")]
    pub default_window: Rect,
    #[serde(default = "default_min_width")]
    pub min_width: f64,
    #[serde(default = "default_min_height")]
    pub min_height: f64,
    /// Height reserved at the bottom of the viewport for the taskbar
    #[serde(default = "default_taskbar_height")]
    pub taskbar_height: f64,
}

fn default_window() -> Rect {
    DEFAULT_WINDOW_GEOMETRY
}

fn default_min_width() -> f64 {
    MIN_WINDOW_WIDTH
}

fn default_min_height() -> f64 {
    MIN_WINDOW_HEIGHT
}

fn default_taskbar_height() -> f64 {
    48.0
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            default_window: default_window(),
            min_width: default_min_width(),
            min_height: default_min_height(),
            taskbar_height: default_taskbar_height(),
        }
    }
}

impl ShellConfig {
    /// Default location: `<config dir>/deskshell/settings.json`
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join("deskshell/settings.json")
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the default path, falling back to defaults on any error
    pub fn load_or_default() -> Self {
        let path = Self::default_path();
        if !path.exists() {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Self::default();
        }
        match Self::load(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "invalid settings, using defaults");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // Settings may raise the minimum frame size, never lower it
        if !(self.min_width >= MIN_WINDOW_WIDTH && self.min_height >= MIN_WINDOW_HEIGHT) {
            return Err(ConfigError::Invalid(format!(
                "minimum window size must be at least {}x{}, got {}x{}",
                MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT, self.min_width, self.min_height
            )));
        }
        if !(self.taskbar_height >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "taskbar height must not be negative, got {}",
                self.taskbar_height
            )));
        }
        Ok(())
    }

    pub fn limits(&self) -> SizeLimits {
        SizeLimits {
            min_width: self.min_width,
            min_height: self.min_height,
        }
    }
}
