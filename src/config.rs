// src/config.rs

//! Defines the configuration structures for `core-paint`.
//!
//! Every section derives `Deserialize` with `#[serde(default)]`, so a config
//! file only needs to mention the settings it wants to change. Configuration is
//! read from JSON; the path comes from the `CORE_PAINT_CONFIG` environment
//! variable when the global [`CONFIG`] is first touched.

use std::path::Path;

use log::{info, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::font::{CodePage, DEFAULT_GLYPH_SPACING};
use crate::renderer::{Compositing, GpuFillMode};

/// Environment variable naming the JSON config file.
pub const CONFIG_ENV_VAR: &str = "CORE_PAINT_CONFIG";

/// Process-wide configuration, loaded on first access.
pub static CONFIG: Lazy<Config> = Lazy::new(Config::load_or_default);

// --- Top-Level Configuration Structure ---

/// Root of the configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Pixel surface settings.
    pub surface: SurfaceConfig,
    /// Bitmap font settings.
    pub font: FontConfig,
    /// GPU adapter settings.
    pub gpu: GpuConfig,
    /// Image export settings.
    pub snapshot: SnapshotConfig,
}

impl Config {
    /// Parses a JSON document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses the JSON file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }

    /// Loads the file named by [`CONFIG_ENV_VAR`], falling back to defaults
    /// when the variable is unset or the file cannot be used.
    pub fn load_or_default() -> Self {
        let Ok(path) = std::env::var(CONFIG_ENV_VAR) else {
            return Config::default();
        };
        match Config::load(&path) {
            Ok(config) => {
                info!("Loaded configuration from {}", path);
                config
            }
            Err(e) => {
                warn!(
                    "Failed to load configuration from {}: {}. Using defaults.",
                    path, e
                );
                Config::default()
            }
        }
    }
}

// --- Surface Configuration ---

/// Size and compositing policy of the pixel renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Width in pixels. Must be positive.
    pub width: i32,
    /// Height in pixels. Must be positive.
    pub height: i32,
    /// `"source_over"` blends against existing pixels, `"overwrite"` replaces them.
    pub compositing: Compositing,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        SurfaceConfig {
            width: 640,
            height: 480,
            compositing: Compositing::SourceOver,
        }
    }
}

// --- Font Configuration ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Initial code page, `"cp437"` or `"windows1252"`.
    pub code_page: CodePage,
    /// Pixels between glyph cells before scaling.
    pub glyph_spacing: i32,
}

impl Default for FontConfig {
    fn default() -> Self {
        FontConfig {
            code_page: CodePage::Cp437,
            glyph_spacing: DEFAULT_GLYPH_SPACING,
        }
    }
}

// --- GPU Configuration ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GpuConfig {
    /// How gradient and checkerboard fills are emitted.
    pub fill_mode: GpuFillMode,
}

// --- Snapshot Configuration ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotConfig {
    /// Where the demo binary writes its PNG.
    pub output: String,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        SnapshotConfig {
            output: "core-paint.png".to_string(),
        }
    }
}
