//! Canvas configuration: surface size, pan step, grid geometry, palette, and overlay text.
//!
//! Defaults reproduce the built-in demo. A host may embed a JSON document that
//! overrides any subset of fields; missing fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    DEBUG_MARKER_ANCHOR, DEBUG_MARKER_TEXT, GRID_CELL, GRID_PITCH, INSTRUCTIONS, PAN_STEP, VIEWPORT_HEIGHT,
    VIEWPORT_WIDTH, WINDOW_TITLE,
};
use crate::render::Color;
use crate::view::Point;

/// Errors raised while loading a configuration override.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid surface size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
    #[error("grid pitch {pitch} must be at most the surface extent, and cell {cell} positive and smaller than it")]
    InvalidGrid { pitch: i64, cell: f64 },
    #[error("pan step must be finite, got {0}")]
    InvalidPanStep(f64),
    #[error("invalid color {0:?}, expected #RRGGBB or #RRGGBBAA")]
    InvalidColor(String),
}

/// Colors used by each render layer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Color,
    pub border: Color,
    pub grid: Color,
    pub path: Color,
    pub text: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::YELLOW,
            border: Color::BLACK,
            grid: Color::BLACK,
            path: Color::WHITE,
            text: Color::WHITE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Logical surface width in pixels.
    pub width: u32,
    /// Logical surface height in pixels.
    pub height: u32,
    pub title: String,
    /// Offset change per held arrow key per tick.
    pub pan_step: f64,
    pub grid_pitch: i64,
    pub grid_cell: f64,
    pub palette: Palette,
    /// World-space position of the debug marker.
    pub marker_anchor: Point,
    pub marker_text: String,
    pub instructions: String,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: VIEWPORT_WIDTH,
            height: VIEWPORT_HEIGHT,
            title: WINDOW_TITLE.to_owned(),
            pan_step: PAN_STEP,
            grid_pitch: GRID_PITCH,
            grid_cell: GRID_CELL,
            palette: Palette::default(),
            marker_anchor: Point::new(DEBUG_MARKER_ANCHOR.0, DEBUG_MARKER_ANCHOR.1),
            marker_text: DEBUG_MARKER_TEXT.to_owned(),
            instructions: INSTRUCTIONS.to_owned(),
        }
    }
}

impl CanvasConfig {
    /// Parse a JSON override document and validate the result.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or bad colors, and a
    /// validation variant for out-of-range values.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the geometry can be rendered.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field found.
    #[allow(clippy::cast_precision_loss)]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidSize { width: self.width, height: self.height });
        }
        let max_pitch = i64::from(self.width.max(self.height));
        let pitch_ok = self.grid_pitch > 0 && self.grid_pitch <= max_pitch;
        if !pitch_ok || !(self.grid_cell > 0.0 && self.grid_cell < self.grid_pitch as f64) {
            return Err(ConfigError::InvalidGrid { pitch: self.grid_pitch, cell: self.grid_cell });
        }
        if !self.pan_step.is_finite() {
            return Err(ConfigError::InvalidPanStep(self.pan_step));
        }
        Ok(())
    }
}
