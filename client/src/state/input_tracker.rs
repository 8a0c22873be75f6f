//! Browser input accumulated between animation frames.
//!
//! ARCHITECTURE
//! ============
//! DOM listeners fire whenever the browser delivers events; the controller
//! reads input once per frame. `InputTracker` sits between the two: listeners
//! write level state (keys and buttons held, cursor position) into it, and a
//! right-button release latches an edge flag that stays set until the frame
//! that observes it calls [`InputTracker::end_frame`].

#[cfg(test)]
#[path = "input_tracker_test.rs"]
mod input_tracker_test;

use canvas::input::{ArrowKeys, Button, Direction, InputSnapshot, InputSource};
use canvas::view::Point;

use crate::util::canvas_input::{BUTTONS_PRIMARY, BUTTONS_SECONDARY, map_button, map_key};

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    arrows: ArrowKeys,
    left_held: bool,
    right_held: bool,
    right_released: bool,
    cursor: Point,
}

impl InputTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a `keydown`. Returns `true` if the key is one the canvas uses.
    pub fn key_down(&mut self, key: &str) -> bool {
        self.set_key(key, true)
    }

    /// Record a `keyup`. Returns `true` if the key is one the canvas uses.
    pub fn key_up(&mut self, key: &str) -> bool {
        self.set_key(key, false)
    }

    fn set_key(&mut self, key: &str, held: bool) -> bool {
        let Some(direction) = map_key(key) else {
            return false;
        };
        match direction {
            Direction::Left => self.arrows.left = held,
            Direction::Right => self.arrows.right = held,
            Direction::Up => self.arrows.up = held,
            Direction::Down => self.arrows.down = held,
        }
        true
    }

    /// Record a `mousedown` for the DOM button code.
    pub fn button_down(&mut self, button: i16) {
        match map_button(button) {
            Some(Button::Primary) => self.left_held = true,
            Some(Button::Secondary) => self.right_held = true,
            None => {}
        }
    }

    /// Record a `mouseup` for the DOM button code.
    pub fn button_up(&mut self, button: i16) {
        match map_button(button) {
            Some(Button::Primary) => self.left_held = false,
            Some(Button::Secondary) => self.release_right(),
            None => {}
        }
    }

    /// Reconcile held buttons with a `MouseEvent.buttons` bitmask.
    ///
    /// Catches presses and releases whose own events were delivered elsewhere.
    pub fn sync_buttons(&mut self, buttons: u16) {
        self.left_held = buttons & BUTTONS_PRIMARY != 0;
        if buttons & BUTTONS_SECONDARY != 0 {
            self.right_held = true;
        } else {
            self.release_right();
        }
    }

    /// Record the cursor position in canvas coordinates.
    pub fn cursor_moved(&mut self, position: Point) {
        self.cursor = position;
    }

    /// Drop every held key and button, e.g. on blur or when the mouse leaves.
    ///
    /// A held right button still produces its release edge.
    pub fn release_all(&mut self) {
        self.arrows = ArrowKeys::default();
        self.left_held = false;
        self.release_right();
    }

    /// Clear edge-triggered state once a frame has consumed it.
    pub fn end_frame(&mut self) {
        self.right_released = false;
    }

    /// Current state as a plain snapshot.
    #[must_use]
    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot::capture(self)
    }

    fn release_right(&mut self) {
        if self.right_held {
            self.right_released = true;
        }
        self.right_held = false;
    }
}

impl InputSource for InputTracker {
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
        button == Button::Secondary && self.right_released
    }

    fn cursor(&self) -> Point {
        self.cursor
    }
}
