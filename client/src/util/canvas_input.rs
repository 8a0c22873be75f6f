//! Canvas input mapping: DOM key names and mouse button codes to canvas input types.

#[cfg(test)]
#[path = "canvas_input_test.rs"]
mod canvas_input_test;

use canvas::input::{Button as CanvasButton, Direction};
use canvas::view::Point as CanvasPoint;

/// Bit in `MouseEvent.buttons` for the primary (left) button.
pub const BUTTONS_PRIMARY: u16 = 1;

/// Bit in `MouseEvent.buttons` for the secondary (right) button.
pub const BUTTONS_SECONDARY: u16 = 2;

/// Map a `KeyboardEvent.key` value to a pan direction. Non-arrow keys map to `None`.
pub fn map_key(key: &str) -> Option<Direction> {
    match key {
        "ArrowLeft" => Some(Direction::Left),
        "ArrowRight" => Some(Direction::Right),
        "ArrowUp" => Some(Direction::Up),
        "ArrowDown" => Some(Direction::Down),
        _ => None,
    }
}

/// Map a `MouseEvent.button` code. Middle and auxiliary buttons are ignored.
pub fn map_button(button: i16) -> Option<CanvasButton> {
    match button {
        0 => Some(CanvasButton::Primary),
        2 => Some(CanvasButton::Secondary),
        _ => None,
    }
}

/// Arrow keys would otherwise scroll the page around the canvas.
pub fn should_prevent_default_key(key: &str) -> bool {
    map_key(key).is_some()
}

pub fn mouse_point(ev: &leptos::ev::MouseEvent) -> CanvasPoint {
    CanvasPoint::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}
