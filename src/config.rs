use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Grid geometry supplied by the host: column count, cell edge in pixels,
/// and the pixel gap between cells. Row count is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridConfig {
    pub column_count: i32,
    pub base_size: f32,
    pub gap: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            column_count: 6,
            base_size: 80.0,
            gap: 8.0,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("columnCount must be positive, got {0}")]
    ColumnCount(i32),
    #[error("baseSize must be positive, got {0}")]
    BaseSize(f32),
    #[error("gap must be non-negative, got {0}")]
    Gap(f32),
}

impl GridConfig {
    pub fn new(column_count: i32, base_size: f32, gap: f32) -> Result<Self, ConfigError> {
        let config = Self {
            column_count,
            base_size,
            gap,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.column_count <= 0 {
            return Err(ConfigError::ColumnCount(self.column_count));
        }
        if !(self.base_size > 0.0) {
            return Err(ConfigError::BaseSize(self.base_size));
        }
        if !(self.gap >= 0.0) {
            return Err(ConfigError::Gap(self.gap));
        }
        Ok(())
    }
}

// Host config files may leave fields out; absent fields keep their defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    column_count: Option<i32>,
    base_size: Option<f32>,
    gap: Option<f32>,
}

/// Loads grid settings from a JSON file (JSON5 accepted as a fallback for
/// hand-written files), overlaid onto the defaults. `None` yields the
/// defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<GridConfig> {
    let mut config = GridConfig::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = match serde_json::from_str(&contents) {
        Ok(parsed) => parsed,
        Err(_) => json5::from_str(&contents)?,
    };

    if let Some(v) = parsed.column_count {
        config.column_count = v;
    }
    if let Some(v) = parsed.base_size {
        config.base_size = v;
    }
    if let Some(v) = parsed.gap {
        config.gap = v;
    }
    config.validate()?;
    Ok(config)
}
