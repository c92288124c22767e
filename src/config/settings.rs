//! User preferences persisted as TOML
//!
//! Holds the window/theme state, the generator defaults restored by Clear,
//! and the output folder the save dialog starts in.

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::color::FillColor;
use crate::constants::{generator, output, validation};
use crate::generator::ErrorCorrection;

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub window: WindowSettings,
    #[serde(default)]
    pub generator: GeneratorDefaults,
    #[serde(default)]
    pub output: OutputSettings,
}

/// Window geometry and appearance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSettings {
    #[serde(default = "default_window_width", deserialize_with = "saturating_u16")]
    pub width: u16,
    #[serde(default = "default_window_height", deserialize_with = "saturating_u16")]
    pub height: u16,
    #[serde(default)]
    pub theme: Theme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Follow the OS preference
    #[default]
    System,
    Light,
    Dark,
}

/// Initial generator settings, also restored by Clear
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorDefaults {
    #[serde(default = "default_module_scale", deserialize_with = "saturating_u8")]
    pub module_scale: u8,
    #[serde(default)]
    pub error_correction: ErrorCorrection,
    #[serde(default)]
    pub fill_color: FillColor,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Folder the save dialog opens in (default: ~/QRCodes)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

fn default_window_width() -> u16 {
    validation::MIN_WINDOW_WIDTH
}

fn default_window_height() -> u16 {
    validation::MIN_WINDOW_HEIGHT
}

fn default_module_scale() -> u8 {
    generator::DEFAULT_MODULE_SCALE
}

// Any integer is accepted and pinned to the field's range here so that
// `validate_and_clamp` can pull it into the allowed range with a warning
// instead of the whole file failing to parse.
fn saturating_u8<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let value = i64::deserialize(deserializer)?;
    Ok(value.clamp(0, i64::from(u8::MAX)) as u8)
}

fn saturating_u16<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u16, D::Error> {
    let value = i64::deserialize(deserializer)?;
    Ok(value.clamp(0, i64::from(u16::MAX)) as u16)
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: default_window_width(),
            height: default_window_height(),
            theme: Theme::default(),
        }
    }
}

impl Default for GeneratorDefaults {
    fn default() -> Self {
        Self {
            module_scale: default_module_scale(),
            error_correction: ErrorCorrection::default(),
            fill_color: FillColor::default(),
        }
    }
}

impl OutputSettings {
    /// Configured directory, or `~/QRCodes`
    pub fn resolved_dir(&self) -> PathBuf {
        self.directory.clone().unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(output::DEFAULT_DIR_NAME)
        })
    }

    /// Create the output directory if it does not exist yet
    pub fn ensure_dir(&self) -> Result<PathBuf> {
        let dir = self.resolved_dir();
        if !dir.exists() {
            fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create output directory {:?}", dir))?;
            info!(path = %dir.display(), "Created output directory");
        }
        Ok(dir)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            generator: GeneratorDefaults::default(),
            output: OutputSettings::default(),
        }
    }
}

impl Config {
    pub fn path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(crate::constants::config::APP_DIR);
        path.push(crate::constants::config::FILENAME);
        path
    }

    /// Load configuration from the default location or create it
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path())
    }

    /// Load configuration from `path`, writing defaults there if it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(path = %path.display(), "Config file not found, creating default config");
            let config = Config::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        let mut config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse TOML from {:?}", path))?;
        config.validate_and_clamp();

        info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .context("Failed to serialize config to TOML")?;

        fs::write(path, toml_string)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        info!(path = %path.display(), "Saved config");
        Ok(())
    }

    /// Clamp loaded values to safe ranges
    fn validate_and_clamp(&mut self) {
        use crate::constants::generator::{MAX_MODULE_SCALE, MIN_MODULE_SCALE};
        use crate::constants::validation::*;

        let scale = self.generator.module_scale;
        if !(MIN_MODULE_SCALE..=MAX_MODULE_SCALE).contains(&scale) {
            let clamped = scale.clamp(MIN_MODULE_SCALE, MAX_MODULE_SCALE);
            warn!(module_scale = scale, using = clamped, "module_scale out of range, clamping");
            self.generator.module_scale = clamped;
        }

        if self.window.width < MIN_WINDOW_WIDTH {
            warn!(width = self.window.width, min = MIN_WINDOW_WIDTH, "window width below minimum, clamping");
            self.window.width = MIN_WINDOW_WIDTH;
        } else if self.window.width > MAX_WINDOW_DIMENSION {
            warn!(width = self.window.width, max = MAX_WINDOW_DIMENSION, "window width exceeds maximum, clamping");
            self.window.width = MAX_WINDOW_DIMENSION;
        }

        if self.window.height < MIN_WINDOW_HEIGHT {
            warn!(height = self.window.height, min = MIN_WINDOW_HEIGHT, "window height below minimum, clamping");
            self.window.height = MIN_WINDOW_HEIGHT;
        } else if self.window.height > MAX_WINDOW_DIMENSION {
            warn!(height = self.window.height, max = MAX_WINDOW_DIMENSION, "window height exceeds maximum, clamping");
            self.window.height = MAX_WINDOW_DIMENSION;
        }
    }
}
