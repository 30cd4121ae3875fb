//! Grid dimensions, with defaults and loaders.

use serde::Deserialize;

use crate::consts::{DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_LABEL_MARGIN, DEFAULT_PIXEL_SIZE};
use crate::error::GridError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Fixed geometry of a grid. Read once when a renderer is built.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Rows.
    pub height: u32,
    /// Columns.
    pub width: u32,
    /// Cell edge length in pixels, excluding the grid line.
    pub pixel_size: f64,
    /// Left band reserved for row labels, in pixels.
    pub label_margin: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_GRID_HEIGHT,
            width: DEFAULT_GRID_WIDTH,
            pixel_size: DEFAULT_PIXEL_SIZE,
            label_margin: DEFAULT_LABEL_MARGIN,
        }
    }
}

impl GridConfig {
    #[must_use]
    pub fn new(height: u32, width: u32, pixel_size: f64, label_margin: f64) -> Self {
        Self { height, width, pixel_size, label_margin }
    }

    /// Build from environment variables, falling back to defaults.
    ///
    /// Optional:
    /// - `GRID_HEIGHT`: rows, default 40
    /// - `GRID_WIDTH`: columns, default 75
    /// - `GRID_PIXEL_SIZE`: default 20
    /// - `GRID_LABEL_MARGIN`: default 15
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Config`] if a variable is set but does not parse.
    pub fn from_env() -> Result<Self, GridError> {
        let defaults = Self::default();
        Ok(Self {
            height: env_parse("GRID_HEIGHT", defaults.height)?,
            width: env_parse("GRID_WIDTH", defaults.width)?,
            pixel_size: env_parse("GRID_PIXEL_SIZE", defaults.pixel_size)?,
            label_margin: env_parse("GRID_LABEL_MARGIN", defaults.label_margin)?,
        })
    }

    /// Parse a JSON object; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Config`] on malformed JSON or mistyped fields.
    pub fn from_json(raw: &str) -> Result<Self, GridError> {
        Ok(serde_json::from_str(raw)?)
    }
}

fn env_parse<T>(key: &str, default: T) -> Result<T, GridError>
where
    T: std::str::FromStr,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| GridError::Config(format!("invalid {key}: {raw}"))),
        Err(_) => Ok(default),
    }
}
