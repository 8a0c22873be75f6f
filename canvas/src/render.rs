//! Rendering: draws the full canvas scene through a [`RenderTarget`].
//!
//! The scene is drawn in fixed layers: background fill, viewport border,
//! offset-scrolled grid, freehand paths, then the debug marker and the
//! instructional overlay. Drawing receives read-only views of the controller
//! state and never mutates it, so the same state always produces the same
//! sequence of draw calls.
//!
//! All target calls propagate errors via `Result<(), T::Error>`. The top-level
//! caller ([`crate::engine::run_frame`] or the host) decides what to do with them.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::convert::Infallible;
use std::fmt;

use serde::Deserialize;

use crate::config::{CanvasConfig, ConfigError};
use crate::path::Path;
use crate::view::{Point, ViewState};

// =============================================================
// Color
// =============================================================

/// An 8-bit RGBA color. Deserializes from a `#RRGGBB` or `#RRGGBBAA` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidColor`] for anything else.
    pub fn from_hex(raw: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidColor(raw.to_owned());
        let hex = raw.strip_prefix('#').ok_or_else(invalid)?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) || !(hex.len() == 6 || hex.len() == 8) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        let a = if hex.len() == 8 { channel(6)? } else { 255 };
        Ok(Self { r: channel(0)?, g: channel(2)?, b: channel(4)?, a })
    }

    /// CSS color string understood by `CanvasRenderingContext2d`.
    #[must_use]
    pub fn to_css(self) -> String {
        self.to_string()
    }
}

impl TryFrom<String> for Color {
    type Error = ConfigError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::from_hex(&raw)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            let alpha = f64::from(self.a) / 255.0;
            write!(f, "rgba({}, {}, {}, {alpha:.3})", self.r, self.g, self.b)
        }
    }
}

// =============================================================
// Render target
// =============================================================

/// Primitive drawing operations supplied by the host.
///
/// Coordinates are screen pixels with the origin at the top-left corner.
pub trait RenderTarget {
    type Error;

    /// Fill the entire surface.
    fn fill(&mut self, color: Color) -> Result<(), Self::Error>;

    /// Draw a straight line between two points.
    fn line(&mut self, from: Point, to: Point, color: Color) -> Result<(), Self::Error>;

    /// Draw a filled axis-aligned rectangle.
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) -> Result<(), Self::Error>;

    /// Draw text with its top-left corner at `(x, y)`.
    fn text_at(&mut self, text: &str, x: i64, y: i64, color: Color) -> Result<(), Self::Error>;

    /// Draw text at the fixed overlay location (top-left of the surface).
    fn overlay_text(&mut self, text: &str, color: Color) -> Result<(), Self::Error>;
}

/// A single recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Fill(Color),
    Line { from: Point, to: Point, color: Color },
    Rect { x: f64, y: f64, width: f64, height: f64, color: Color },
    Text { text: String, x: i64, y: i64, color: Color },
    Overlay { text: String, color: Color },
}

/// Render target that records calls instead of drawing them.
#[derive(Debug, Default)]
pub struct Recorder {
    calls: Vec<DrawCall>,
}

impl Recorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls recorded so far, in order.
    #[must_use]
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Drain the recorded calls, leaving the recorder empty.
    pub fn take(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }
}

impl RenderTarget for Recorder {
    type Error = Infallible;

    fn fill(&mut self, color: Color) -> Result<(), Self::Error> {
        self.calls.push(DrawCall::Fill(color));
        Ok(())
    }

    fn line(&mut self, from: Point, to: Point, color: Color) -> Result<(), Self::Error> {
        self.calls.push(DrawCall::Line { from, to, color });
        Ok(())
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) -> Result<(), Self::Error> {
        self.calls.push(DrawCall::Rect { x, y, width, height, color });
        Ok(())
    }

    fn text_at(&mut self, text: &str, x: i64, y: i64, color: Color) -> Result<(), Self::Error> {
        self.calls.push(DrawCall::Text { text: text.to_owned(), x, y, color });
        Ok(())
    }

    fn overlay_text(&mut self, text: &str, color: Color) -> Result<(), Self::Error> {
        self.calls.push(DrawCall::Overlay { text: text.to_owned(), color });
        Ok(())
    }
}

// =============================================================
// Scene
// =============================================================

/// Draw the full scene: background, border, grid, paths, and overlay.
///
/// `in_progress` is the path currently being drawn; it is skipped until it has a segment.
///
/// # Errors
///
/// Returns the first error reported by `target`.
pub fn draw<T: RenderTarget + ?Sized>(
    target: &mut T,
    config: &CanvasConfig,
    view: &ViewState,
    committed: &[Path],
    in_progress: Option<&Path>,
) -> Result<(), T::Error> {
    let palette = &config.palette;

    // Layer 1: background.
    target.fill(palette.background)?;

    // Layer 2: viewport border.
    draw_border(target, config)?;

    // Layer 3: grid.
    draw_grid(target, config, view)?;

    // Layer 4: paths, committed first.
    for path in committed {
        draw_path(target, path, view, palette.path)?;
    }
    if let Some(path) = in_progress.filter(|p| p.is_drawable()) {
        draw_path(target, path, view, palette.path)?;
    }

    // Layer 5: overlay.
    let (mx, my) = view.anchored_text_position(config.marker_anchor);
    target.text_at(&config.marker_text, mx, my, palette.text)?;
    target.overlay_text(&config.instructions, palette.text)?;

    Ok(())
}

fn draw_border<T: RenderTarget + ?Sized>(target: &mut T, config: &CanvasConfig) -> Result<(), T::Error> {
    let right = f64::from(config.width) - 1.0;
    let bottom = f64::from(config.height) - 1.0;
    let color = config.palette.border;

    target.line(Point::new(0.0, 0.0), Point::new(right, 0.0), color)?;
    target.line(Point::new(0.0, 0.0), Point::new(0.0, bottom), color)?;
    target.line(Point::new(right, 0.0), Point::new(right, bottom), color)?;
    target.line(Point::new(0.0, bottom), Point::new(right, bottom), color)
}

/// Cells are emitted column by column, starting from the view's grid origin.
#[allow(clippy::cast_precision_loss)]
fn draw_grid<T: RenderTarget + ?Sized>(target: &mut T, config: &CanvasConfig, view: &ViewState) -> Result<(), T::Error> {
    let pitch = config.grid_pitch;
    let (origin_x, origin_y) = view.grid_origin(pitch);
    let width = i64::from(config.width);
    let height = i64::from(config.height);
    let cell = config.grid_cell;

    let mut x = Some(origin_x);
    while let Some(cx) = x.filter(|&cx| cx < width) {
        let mut y = Some(origin_y);
        while let Some(cy) = y.filter(|&cy| cy < height) {
            target.fill_rect(cx as f64, cy as f64, cell, cell, config.palette.grid)?;
            y = cy.checked_add(pitch);
        }
        x = cx.checked_add(pitch);
    }
    Ok(())
}

fn draw_path<T: RenderTarget + ?Sized>(target: &mut T, path: &Path, view: &ViewState, color: Color) -> Result<(), T::Error> {
    for (a, b) in path.segments() {
        target.line(view.world_to_screen(a), view.world_to_screen(b), color)?;
    }
    Ok(())
}
