//! Shared numeric and text constants for the canvas crate.

// ── Viewport ────────────────────────────────────────────────────

/// Logical surface width in pixels.
pub const VIEWPORT_WIDTH: u32 = 800;

/// Logical surface height in pixels.
pub const VIEWPORT_HEIGHT: u32 = 600;

/// Host window / page title.
pub const WINDOW_TITLE: &str = "Infinite Canvas Example";

// ── Panning ─────────────────────────────────────────────────────

/// Offset change per held arrow key per tick.
pub const PAN_STEP: f64 = 5.0;

// ── Grid ────────────────────────────────────────────────────────

/// Distance between the origins of adjacent grid cells.
pub const GRID_PITCH: i64 = 50;

/// Side length of a filled grid cell. Leaves a 2-unit gutter inside the pitch.
pub const GRID_CELL: f64 = 48.0;

// ── Paths ───────────────────────────────────────────────────────

/// A path needs at least one segment to be committed or drawn.
pub const MIN_PATH_POINTS: usize = 2;

// ── Overlay ─────────────────────────────────────────────────────

/// World-space anchor of the "X" debug marker.
pub const DEBUG_MARKER_ANCHOR: (f64, f64) = (100.0, 100.0);

/// Glyph drawn at the debug marker anchor.
pub const DEBUG_MARKER_TEXT: &str = "X";

/// Instructional text pinned to the overlay location.
pub const INSTRUCTIONS: &str = "Use arrow keys to move, right-click and drag to draw";
