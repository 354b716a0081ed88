//! Board configuration parsed from JSON.
//!
//! Every field has a default matching the stock board, so `{}` is a valid
//! config and partial documents override only what they name.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{HIT_RADIUS_PX, RECT_CAPACITY, RECT_FILL, RECT_SIZE_PX};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("capacity must be at least 1")]
    ZeroCapacity,
    #[error("rect_size must be positive and finite, got {0}")]
    InvalidRectSize(f64),
    #[error("hit_radius must be positive and finite, got {0}")]
    InvalidHitRadius(f64),
    #[error("fill color must not be empty")]
    EmptyFill,
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Rectangles held before the board resets.
    pub capacity: usize,
    /// Side length given to a rectangle when a pointer lands on it.
    pub rect_size: f64,
    /// Half-extent of the square grab zone around each rectangle center.
    pub hit_radius: f64,
    /// CSS color used to fill rectangles.
    pub fill: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            capacity: RECT_CAPACITY,
            rect_size: RECT_SIZE_PX,
            hit_radius: HIT_RADIUS_PX,
            fill: RECT_FILL.to_string(),
        }
    }
}

impl BoardConfig {
    /// Parse and validate a JSON config document.
    ///
    /// # Errors
    ///
    /// Returns `Parse` for malformed JSON and the matching variant for any
    /// field that fails [`BoardConfig::validate`].
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every field describes a usable board.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if !is_positive(self.rect_size) {
            return Err(ConfigError::InvalidRectSize(self.rect_size));
        }
        if !is_positive(self.hit_radius) {
            return Err(ConfigError::InvalidHitRadius(self.hit_radius));
        }
        if self.fill.trim().is_empty() {
            return Err(ConfigError::EmptyFill);
        }
        Ok(())
    }
}

fn is_positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}
