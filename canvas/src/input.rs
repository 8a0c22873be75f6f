//! Input model: arrow keys, mouse buttons, per-frame snapshots, and the interaction state machine.
//!
//! The host owns the raw input devices and exposes them through [`InputSource`].
//! Once per frame the controller reads a source into an [`InputSnapshot`], a
//! plain value that carries level-triggered state (keys and buttons held) plus
//! the edge-triggered right-button release. [`InteractionMode`] is the active
//! mouse gesture, carrying the context needed to apply deltas or finish a path.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::path::Path;
use crate::view::Point;

/// Arrow-key direction that pans the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Every direction, in the order the controller applies them.
    pub const ALL: [Self; 4] = [Self::Right, Self::Left, Self::Down, Self::Up];

    /// Offset change for one tick of this key being held.
    #[must_use]
    pub fn pan_delta(self, step: f64) -> (f64, f64) {
        match self {
            Self::Left => (-step, 0.0),
            Self::Right => (step, 0.0),
            Self::Up => (0.0, -step),
            Self::Down => (0.0, step),
        }
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button. Drags the view.
    Primary,
    /// Right mouse button. Draws freehand paths.
    Secondary,
}

/// Read access to the host's current input state.
///
/// Hosts implement this over whatever device API they have; the controller
/// only ever sees it through [`InputSnapshot::capture`].
pub trait InputSource {
    /// Whether the arrow key for `direction` is currently held.
    fn is_direction_held(&self, direction: Direction) -> bool;

    /// Whether `button` is currently held.
    fn is_button_held(&self, button: Button) -> bool;

    /// Whether `button` went from held to released during this frame.
    fn is_button_just_released(&self, button: Button) -> bool;

    /// Cursor position in screen coordinates.
    fn cursor(&self) -> Point;
}

/// Held state of the four arrow keys.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArrowKeys {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl ArrowKeys {
    #[must_use]
    pub fn is_held(&self, direction: Direction) -> bool {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
            Direction::Up => self.up,
            Direction::Down => self.down,
        }
    }

    /// Summed offset change for every held key. Opposite keys cancel.
    #[must_use]
    pub fn pan_delta(&self, step: f64) -> (f64, f64) {
        Direction::ALL
            .into_iter()
            .filter(|d| self.is_held(*d))
            .map(|d| d.pan_delta(step))
            .fold((0.0, 0.0), |(ax, ay), (dx, dy)| (ax + dx, ay + dy))
    }
}

/// What the mouse asks for this tick, resolved in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseIntent {
    /// Left held. Wins over anything the right button does.
    Pan,
    /// Right held.
    Draw,
    /// Right released this tick.
    Release,
    /// No button activity.
    Rest,
}

/// Everything the controller reads from the host in one tick.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    pub arrows: ArrowKeys,
    pub left_held: bool,
    pub right_held: bool,
    /// Edge-triggered: true only on the tick the right button was released.
    pub right_released: bool,
    /// Screen-space cursor position.
    pub cursor: Point,
}

impl InputSnapshot {
    /// Read the current state of `source`.
    #[must_use]
    pub fn capture<S: InputSource + ?Sized>(source: &S) -> Self {
        Self {
            arrows: ArrowKeys {
                left: source.is_direction_held(Direction::Left),
                right: source.is_direction_held(Direction::Right),
                up: source.is_direction_held(Direction::Up),
                down: source.is_direction_held(Direction::Down),
            },
            left_held: source.is_button_held(Button::Primary),
            right_held: source.is_button_held(Button::Secondary),
            right_released: source.is_button_just_released(Button::Secondary),
            cursor: source.cursor(),
        }
    }

    /// Resolve the mouse branch for this tick: left, then right held, then right released.
    #[must_use]
    pub fn mouse_intent(&self) -> MouseIntent {
        if self.left_held {
            MouseIntent::Pan
        } else if self.right_held {
            MouseIntent::Draw
        } else if self.right_released {
            MouseIntent::Release
        } else {
            MouseIntent::Rest
        }
    }
}

impl InputSource for InputSnapshot {
    fn is_direction_held(&self, direction: Direction) -> bool {
        self.arrows.is_held(direction)
    }

    fn is_button_held(&self, button: Button) -> bool {
        match button {
            Button::Primary => self.left_held,
            Button::Secondary => self.right_held,
        }
    }

    fn is_button_just_released(&self, button: Button) -> bool {
        // Only the right-button release is tracked as an edge.
        button == Button::Secondary && self.right_released
    }

    fn cursor(&self) -> Point {
        self.cursor
    }
}

/// Active mouse gesture.
///
/// Panning and drawing are separate variants, so they can never be active at
/// the same time. The in-progress path lives inside `Drawing` and is the only
/// path that can still be mutated.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum InteractionMode {
    /// No gesture in progress.
    #[default]
    Idle,
    /// The user is dragging the view with the left button.
    Panning {
        /// Screen-space cursor position at the previous tick, used to compute the pan delta.
        last_cursor: Point,
    },
    /// The user is drawing a freehand path with the right button.
    Drawing {
        /// Points captured so far.
        path: Path,
    },
}

impl InteractionMode {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    #[must_use]
    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }

    #[must_use]
    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing { .. })
    }

    /// The path being drawn, if any.
    #[must_use]
    pub fn in_progress(&self) -> Option<&Path> {
        match self {
            Self::Drawing { path } => Some(path),
            Self::Idle | Self::Panning { .. } => None,
        }
    }
}
