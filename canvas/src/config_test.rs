#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_matches_demo_constants() {
    let config = CanvasConfig::default();
    assert_eq!(config.width, 800);
    assert_eq!(config.height, 600);
    assert_eq!(config.title, "Infinite Canvas Example");
    assert_eq!(config.pan_step, 5.0);
    assert_eq!(config.grid_pitch, 50);
    assert_eq!(config.grid_cell, 48.0);
    assert_eq!(config.marker_anchor, Point::new(100.0, 100.0));
    assert_eq!(config.marker_text, "X");
    assert_eq!(config.instructions, "Use arrow keys to move, right-click and drag to draw");
}

#[test]
fn default_palette() {
    let palette = Palette::default();
    assert_eq!(palette.background, Color::YELLOW);
    assert_eq!(palette.border, Color::BLACK);
    assert_eq!(palette.grid, Color::BLACK);
    assert_eq!(palette.path, Color::WHITE);
}

#[test]
fn default_validates() {
    assert!(CanvasConfig::default().validate().is_ok());
}

// =============================================================
// from_json
// =============================================================

#[test]
fn empty_object_yields_defaults() {
    let config = CanvasConfig::from_json("{}").unwrap();
    assert_eq!(config, CanvasConfig::default());
}

#[test]
fn partial_override_keeps_other_fields() {
    let raw = json!({ "pan_step": 10.0, "title": "Scratch" }).to_string();
    let config = CanvasConfig::from_json(&raw).unwrap();
    assert_eq!(config.pan_step, 10.0);
    assert_eq!(config.title, "Scratch");
    assert_eq!(config.width, 800);
    assert_eq!(config.grid_pitch, 50);
}

#[test]
fn palette_override_parses_hex() {
    let raw = json!({ "palette": { "background": "#102030", "path": "#FF000080" } }).to_string();
    let config = CanvasConfig::from_json(&raw).unwrap();
    assert_eq!(config.palette.background, Color::rgb(0x10, 0x20, 0x30));
    assert_eq!(config.palette.path, Color { r: 255, g: 0, b: 0, a: 0x80 });
    assert_eq!(config.palette.grid, Color::BLACK);
}

#[test]
fn marker_anchor_override() {
    let raw = json!({ "marker_anchor": { "x": 5.0, "y": -5.0 } }).to_string();
    let config = CanvasConfig::from_json(&raw).unwrap();
    assert_eq!(config.marker_anchor, Point::new(5.0, -5.0));
}

#[test]
fn malformed_json_is_parse_error() {
    let err = CanvasConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn bad_color_is_rejected() {
    let raw = json!({ "palette": { "grid": "black" } }).to_string();
    let err = CanvasConfig::from_json(&raw).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().contains("black"));
}

#[test]
fn zero_size_is_rejected() {
    let raw = json!({ "width": 0 }).to_string();
    let err = CanvasConfig::from_json(&raw).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidSize { width: 0, height: 600 }));
}

#[test]
fn cell_larger_than_pitch_is_rejected() {
    let raw = json!({ "grid_pitch": 20, "grid_cell": 48.0 }).to_string();
    let err = CanvasConfig::from_json(&raw).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidGrid { pitch: 20, .. }));
}

#[test]
fn cell_equal_to_pitch_is_rejected() {
    let raw = json!({ "grid_pitch": 48, "grid_cell": 48.0 }).to_string();
    let err = CanvasConfig::from_json(&raw).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidGrid { pitch: 48, .. }));
}

#[test]
fn pitch_beyond_surface_is_rejected() {
    let raw = json!({ "grid_pitch": i64::MAX }).to_string();
    let err = CanvasConfig::from_json(&raw).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidGrid { pitch: i64::MAX, .. }));

    let raw = json!({ "grid_pitch": 801 }).to_string();
    assert!(CanvasConfig::from_json(&raw).is_err());
}

#[test]
fn pitch_up_to_larger_surface_side_is_accepted() {
    let raw = json!({ "grid_pitch": 800 }).to_string();
    let config = CanvasConfig::from_json(&raw).unwrap();
    assert_eq!(config.grid_pitch, 800);
}

#[test]
fn non_positive_pitch_is_rejected() {
    let raw = json!({ "grid_pitch": 0 }).to_string();
    let err = CanvasConfig::from_json(&raw).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidGrid { pitch: 0, .. }));
}

#[test]
fn non_finite_pan_step_is_rejected() {
    let config = CanvasConfig { pan_step: f64::INFINITY, ..CanvasConfig::default() };
    assert!(matches!(config.validate(), Err(ConfigError::InvalidPanStep(_))));
}

#[test]
fn error_messages_are_descriptive() {
    let err = ConfigError::InvalidSize { width: 0, height: 10 };
    assert_eq!(err.to_string(), "invalid surface size 0x10");
}
