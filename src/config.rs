use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::hit_testing::LINE_TOUCH_THRESHOLD;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid config value: {0}")]
    InvalidValue(String),
}

/// Tunables for the editing session.
///
/// Every field has a default, so a config file only needs the values it
/// overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Hit tolerance around lines
    pub touch_threshold: f32,
    pub transform: TransformConfig,
    /// Ink colour for freehand strokes
    pub stroke_color: String,
    pub naming: NamingConfig,
    pub placement: PlacementDefaults,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    pub enlarge_factor: f32,
    pub shrink_factor: f32,
    pub move_step: f32,
}

/// How new drawings are named in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    pub prefix: String,
    pub pool_size: usize,
    pub min_suffix: u32,
    pub max_suffix: u32,
}

/// Sizes and colours used when a shape is placed from the toolbar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementDefaults {
    /// Added to the tap position on both axes
    pub tap_offset: f32,
    pub circle_radius: f32,
    pub circle_color: String,
    pub rectangle_size: [f32; 2],
    pub rectangle_corner_radius: f32,
    pub rectangle_color: String,
    /// Fixed first endpoint; the second endpoint follows the tap
    pub line_anchor: [f32; 2],
    pub line_color: String,
    pub line_width: f32,
    pub star_size: [f32; 2],
    pub text: String,
    pub text_font: String,
    pub text_color: String,
    pub text_size: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            touch_threshold: LINE_TOUCH_THRESHOLD,
            transform: TransformConfig::default(),
            stroke_color: "#06d6a0".to_owned(),
            naming: NamingConfig::default(),
            placement: PlacementDefaults::default(),
        }
    }
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            enlarge_factor: 1.2,
            shrink_factor: 0.8,
            move_step: 10.0,
        }
    }
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            prefix: "drawing".to_owned(),
            pool_size: 5,
            min_suffix: 1,
            max_suffix: 100,
        }
    }
}

impl Default for PlacementDefaults {
    fn default() -> Self {
        Self {
            tap_offset: 20.0,
            circle_radius: 28.0,
            circle_color: "blue".to_owned(),
            rectangle_size: [50.0, 30.0],
            rectangle_corner_radius: 10.0,
            rectangle_color: "green".to_owned(),
            line_anchor: [80.0, 80.0],
            line_color: "lightblue".to_owned(),
            line_width: 4.0,
            star_size: [100.0, 100.0],
            text: "Text".to_owned(),
            text_font: "serif".to_owned(),
            text_color: "black".to_owned(),
            text_size: 14.0,
        }
    }
}

impl EditorConfig {
    /// Load from a JSON file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let json = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::InvalidValue(msg.to_owned()));

        if self.touch_threshold.is_nan() || self.touch_threshold < 0.0 {
            return invalid("touch_threshold must be non-negative");
        }
        let t = &self.transform;
        if t.enlarge_factor.is_nan()
            || t.shrink_factor.is_nan()
            || t.enlarge_factor <= 0.0
            || t.shrink_factor <= 0.0
        {
            return invalid("scale factors must be positive");
        }
        if self.naming.pool_size == 0 {
            return invalid("naming.pool_size must be at least 1");
        }
        if self.naming.min_suffix > self.naming.max_suffix {
            return invalid("naming.min_suffix exceeds naming.max_suffix");
        }
        Ok(())
    }
}
