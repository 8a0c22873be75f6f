#![allow(clippy::float_cmp)]

use super::*;

fn held(left: bool, right: bool, up: bool, down: bool) -> ArrowKeys {
    ArrowKeys { left, right, up, down }
}

// =============================================================
// Direction
// =============================================================

#[test]
fn direction_pan_deltas() {
    assert_eq!(Direction::Right.pan_delta(5.0), (5.0, 0.0));
    assert_eq!(Direction::Left.pan_delta(5.0), (-5.0, 0.0));
    assert_eq!(Direction::Down.pan_delta(5.0), (0.0, 5.0));
    assert_eq!(Direction::Up.pan_delta(5.0), (0.0, -5.0));
}

#[test]
fn direction_all_variants_distinct() {
    let variants = Direction::ALL;
    for (i, a) in variants.iter().enumerate() {
        for (j, b) in variants.iter().enumerate() {
            if i == j {
                assert_eq!(a, b);
            } else {
                assert_ne!(a, b);
            }
        }
    }
}

// =============================================================
// ArrowKeys
// =============================================================

#[test]
fn arrow_keys_default_none_held() {
    let keys = ArrowKeys::default();
    for d in Direction::ALL {
        assert!(!keys.is_held(d));
    }
    assert_eq!(keys.pan_delta(5.0), (0.0, 0.0));
}

#[test]
fn arrow_keys_single_key() {
    assert_eq!(held(false, true, false, false).pan_delta(5.0), (5.0, 0.0));
    assert_eq!(held(false, false, true, false).pan_delta(5.0), (0.0, -5.0));
}

#[test]
fn arrow_keys_diagonal() {
    assert_eq!(held(true, false, false, true).pan_delta(5.0), (-5.0, 5.0));
}

#[test]
fn arrow_keys_opposites_cancel() {
    assert_eq!(held(true, true, true, true).pan_delta(5.0), (0.0, 0.0));
}

// =============================================================
// Button
// =============================================================

#[test]
fn button_equality() {
    assert_eq!(Button::Primary, Button::Primary);
    assert_ne!(Button::Primary, Button::Secondary);
}

#[test]
fn button_debug_format() {
    assert_eq!(format!("{:?}", Button::Secondary), "Secondary");
}

// =============================================================
// InputSnapshot: mouse priority
// =============================================================

#[test]
fn snapshot_default_is_rest() {
    assert_eq!(InputSnapshot::default().mouse_intent(), MouseIntent::Rest);
}

#[test]
fn snapshot_left_wins_over_right() {
    let snap = InputSnapshot { left_held: true, right_held: true, right_released: true, ..Default::default() };
    assert_eq!(snap.mouse_intent(), MouseIntent::Pan);
}

#[test]
fn snapshot_right_held_wins_over_release() {
    let snap = InputSnapshot { right_held: true, right_released: true, ..Default::default() };
    assert_eq!(snap.mouse_intent(), MouseIntent::Draw);
}

#[test]
fn snapshot_release_alone() {
    let snap = InputSnapshot { right_released: true, ..Default::default() };
    assert_eq!(snap.mouse_intent(), MouseIntent::Release);
}

// =============================================================
// InputSnapshot: capture
// =============================================================

struct FakeSource {
    keys: ArrowKeys,
    left: bool,
    right: bool,
    released: bool,
    cursor: Point,
}

impl InputSource for FakeSource {
    fn is_direction_held(&self, direction: Direction) -> bool {
        self.keys.is_held(direction)
    }

    fn is_button_held(&self, button: Button) -> bool {
        match button {
            Button::Primary => self.left,
            Button::Secondary => self.right,
        }
    }

    fn is_button_just_released(&self, button: Button) -> bool {
        button == Button::Secondary && self.released
    }

    fn cursor(&self) -> Point {
        self.cursor
    }
}

#[test]
fn capture_copies_every_field() {
    let source = FakeSource {
        keys: held(true, false, false, true),
        left: false,
        right: true,
        released: false,
        cursor: Point::new(12.0, 34.0),
    };
    let snap = InputSnapshot::capture(&source);
    assert_eq!(snap.arrows, held(true, false, false, true));
    assert!(!snap.left_held);
    assert!(snap.right_held);
    assert!(!snap.right_released);
    assert_eq!(snap.cursor, Point::new(12.0, 34.0));
}

#[test]
fn capture_of_snapshot_is_identity() {
    let snap = InputSnapshot {
        arrows: held(false, true, true, false),
        left_held: true,
        right_held: false,
        right_released: true,
        cursor: Point::new(-1.0, 2.0),
    };
    assert_eq!(InputSnapshot::capture(&snap), snap);
}

#[test]
fn snapshot_reports_no_left_release_edge() {
    let snap = InputSnapshot { right_released: true, ..Default::default() };
    assert!(!snap.is_button_just_released(Button::Primary));
    assert!(snap.is_button_just_released(Button::Secondary));
}

// =============================================================
// InteractionMode
// =============================================================

#[test]
fn mode_default_is_idle() {
    let mode = InteractionMode::default();
    assert!(mode.is_idle());
    assert!(!mode.is_panning());
    assert!(!mode.is_drawing());
    assert!(mode.in_progress().is_none());
}

#[test]
fn mode_panning_has_no_path() {
    let mode = InteractionMode::Panning { last_cursor: Point::new(1.0, 1.0) };
    assert!(mode.is_panning());
    assert!(mode.in_progress().is_none());
}

#[test]
fn mode_drawing_exposes_path() {
    let mut path = Path::new();
    path.push(Point::new(4.0, 4.0));
    let mode = InteractionMode::Drawing { path: path.clone() };
    assert!(mode.is_drawing());
    assert_eq!(mode.in_progress(), Some(&path));
}
