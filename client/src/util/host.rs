//! Browser host helpers: surface sizing, configuration lookup, and 2D context setup.

#[cfg(test)]
#[path = "host_test.rs"]
mod host_test;

use canvas::config::CanvasConfig;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use crate::error::HostError;

/// Id of the optional `<script type="application/json">` element holding config overrides.
pub const CONFIG_ELEMENT_ID: &str = "canvas-config";

/// Inline style that pins the canvas to its logical size so the page cannot stretch it.
pub fn canvas_style(width: u32, height: u32) -> String {
    format!("width: {width}px; height: {height}px; display: block; outline: none;")
}

/// Parse an embedded override document, falling back to defaults when it is blank or invalid.
pub fn config_from_source(raw: Option<&str>) -> CanvasConfig {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        log::debug!("no config override, using defaults");
        return CanvasConfig::default();
    };
    match CanvasConfig::from_json(raw) {
        Ok(config) => {
            log::info!("loaded config override from #{CONFIG_ELEMENT_ID}");
            config
        }
        Err(err) => {
            log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
            CanvasConfig::default()
        }
    }
}

/// Read the configuration from the page, if it embeds one.
pub fn load_config(document: &Document) -> CanvasConfig {
    let raw = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());
    config_from_source(raw.as_deref())
}

/// Fetch the 2D rendering context from a canvas element.
///
/// # Errors
///
/// Returns [`HostError::Js`] if the browser throws, or [`HostError::ContextUnavailable`]
/// if the canvas has no 2D context.
pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, HostError> {
    canvas
        .get_context("2d")?
        .ok_or(HostError::ContextUnavailable)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| HostError::ContextUnavailable)
}
