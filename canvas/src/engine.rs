use crate::config::CanvasConfig;
use crate::input::{InputSnapshot, InputSource, InteractionMode, MouseIntent};
use crate::path::{Path, PathStore};
use crate::render::{self, RenderTarget};
use crate::view::{Point, ViewState};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// A frame-driven application: advanced by `tick`, drawn by `render`.
///
/// The scheduler that calls these belongs to the host, not to the game.
pub trait Game {
    /// Advance one frame using this frame's input.
    fn tick(&mut self, input: &InputSnapshot);

    /// Draw the current state. Must not change state.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by `target`.
    fn render<T: RenderTarget + ?Sized>(&self, target: &mut T) -> Result<(), T::Error>;

    /// Logical surface size, whatever size the host reports.
    fn layout(&self, outside_width: u32, outside_height: u32) -> (u32, u32);
}

/// Run one frame: capture input, then `tick`, then `render`.
///
/// # Errors
///
/// Returns the render target's error; state has already been ticked by then.
pub fn run_frame<G, S, T>(game: &mut G, input: &S, target: &mut T) -> Result<(), T::Error>
where
    G: Game + ?Sized,
    S: InputSource + ?Sized,
    T: RenderTarget + ?Sized,
{
    let snapshot = InputSnapshot::capture(input);
    game.tick(&snapshot);
    game.render(target)
}

/// Owns the view offset, the active gesture, and every path.
///
/// Platform-independent; the host supplies input snapshots and render targets.
#[derive(Debug, Default)]
pub struct CanvasController {
    config: CanvasConfig,
    pub view: ViewState,
    mode: InteractionMode,
    paths: PathStore,
}

impl CanvasController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: CanvasConfig) -> Self {
        Self { config, ..Self::default() }
    }

    // --- Queries ---

    #[must_use]
    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// The active gesture.
    #[must_use]
    pub fn mode(&self) -> &InteractionMode {
        &self.mode
    }

    /// Committed paths in commit order.
    #[must_use]
    pub fn paths(&self) -> &[Path] {
        self.paths.paths()
    }

    /// The path being drawn, if any.
    #[must_use]
    pub fn in_progress(&self) -> Option<&Path> {
        self.mode.in_progress()
    }

    // --- Input handling ---

    /// Left held: start panning, or apply the cursor delta since the last tick.
    ///
    /// The view moves opposite to the cursor so the canvas follows the pointer.
    fn on_left_held(&mut self, cursor: Point) {
        if let InteractionMode::Panning { last_cursor } = &mut self.mode {
            self.view.pan_by(last_cursor.x - cursor.x, last_cursor.y - cursor.y);
            *last_cursor = cursor;
            return;
        }
        if let Some(path) = self.mode.in_progress() {
            log::debug!("pan started mid-draw, dropping {} point(s)", path.len());
        }
        self.mode = InteractionMode::Panning { last_cursor: cursor };
    }

    /// Right held: entering the gesture always starts a fresh path.
    fn on_right_held(&mut self, cursor: Point) {
        if !self.mode.is_drawing() {
            log::debug!("drawing started at ({}, {})", cursor.x, cursor.y);
            self.mode = InteractionMode::Drawing { path: Path::new() };
        }
        if let InteractionMode::Drawing { path } = &mut self.mode {
            path.push(cursor);
        }
    }

    /// Right released: commit the path if it has a segment, then go idle.
    fn on_right_released(&mut self) {
        let InteractionMode::Drawing { path } = std::mem::take(&mut self.mode) else {
            return;
        };
        let points = path.len();
        if self.paths.commit(path) {
            log::debug!("committed path with {points} point(s), {} total", self.paths.len());
        } else {
            log::debug!("discarded path with {points} point(s)");
        }
    }

    /// No button activity. Panning ends; a path waits for its release edge.
    fn on_rest(&mut self) {
        if self.mode.is_panning() {
            self.mode = InteractionMode::Idle;
        }
    }
}

impl Game for CanvasController {
    fn tick(&mut self, input: &InputSnapshot) {
        let (dx, dy) = input.arrows.pan_delta(self.config.pan_step);
        self.view.pan_by(dx, dy);

        match input.mouse_intent() {
            MouseIntent::Pan => self.on_left_held(input.cursor),
            MouseIntent::Draw => self.on_right_held(input.cursor),
            MouseIntent::Release => self.on_right_released(),
            MouseIntent::Rest => self.on_rest(),
        }
    }

    fn render<T: RenderTarget + ?Sized>(&self, target: &mut T) -> Result<(), T::Error> {
        render::draw(target, &self.config, &self.view, self.paths.paths(), self.mode.in_progress())
    }

    fn layout(&self, _outside_width: u32, _outside_height: u32) -> (u32, u32) {
        (self.config.width, self.config.height)
    }
}
