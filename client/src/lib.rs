//! # client
//!
//! Leptos + WASM host for the infinite canvas.
//!
//! The `canvas` crate owns view state, gestures, and drawing; this crate
//! supplies what only a browser has: DOM input events, an animation-frame
//! scheduler, and a 2D context to render into.

pub mod app;
pub mod components;
pub mod error;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
use wasm_bindgen::prelude::*;

/// WASM entry point: install the panic hook and logger, then mount the app.
///
/// # Errors
///
/// Returns the startup failure to JavaScript after logging it.
#[cfg(feature = "csr")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    console_log::init_with_level(level).map_err(error::HostError::from)?;

    app::launch().map_err(|err| {
        log::error!("startup failed: {err}");
        JsValue::from(err)
    })
}
