#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use serde::{Deserialize, Serialize};

/// A point in either screen or world space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// World-to-screen translation for the infinite canvas.
///
/// `offset_x` / `offset_y` are unbounded; panning is infinite in every direction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewState {
    pub offset_x: f64,
    pub offset_y: f64,
}

impl ViewState {
    #[must_use]
    pub fn new(offset_x: f64, offset_y: f64) -> Self {
        Self { offset_x, offset_y }
    }

    /// Shift the view by `(dx, dy)` world units.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Convert a stored path point to screen coordinates.
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point {
            x: world.x - self.offset_x,
            y: world.y - self.offset_y,
        }
    }

    /// Screen position of the first (partially off-screen) grid cell.
    ///
    /// Each axis lies in `[-2 * pitch + 1, -1]` and repeats every `pitch` units of offset.
    #[must_use]
    pub fn grid_origin(&self, pitch: i64) -> (i64, i64) {
        (grid_axis_origin(self.offset_x, pitch), grid_axis_origin(self.offset_y, pitch))
    }

    /// Integer screen position of a world-anchored overlay glyph.
    #[must_use]
    pub fn anchored_text_position(&self, anchor: Point) -> (i64, i64) {
        (truncate(anchor.x - self.offset_x), truncate(anchor.y - self.offset_y))
    }
}

/// Grid origin along one axis: `(-trunc(offset) % pitch) - pitch`, with truncating remainder.
///
/// Written as `-(t % pitch)` so `t == i64::MIN` cannot overflow on negation.
#[must_use]
pub fn grid_axis_origin(offset: f64, pitch: i64) -> i64 {
    -(truncate(offset) % pitch) - pitch
}

/// Truncate toward zero. Saturates at the `i64` range; NaN maps to 0.
#[allow(clippy::cast_possible_truncation)]
fn truncate(value: f64) -> i64 {
    value as i64
}
