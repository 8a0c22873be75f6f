//! Host-side failures: missing browser globals, canvas setup, and JS exceptions.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use wasm_bindgen::JsValue;

/// Error raised while bringing up or driving the browser host.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// `window` is not available (not running in a browser main thread).
    #[error("no global window")]
    NoWindow,
    /// The window has no document.
    #[error("window has no document")]
    NoDocument,
    /// The 2D rendering context could not be obtained from the canvas element.
    #[error("canvas 2d context unavailable")]
    ContextUnavailable,
    /// A logger was already installed.
    #[error("logger init failed: {0}")]
    Logger(#[from] log::SetLoggerError),
    /// A browser API threw.
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for HostError {
    fn from(value: JsValue) -> Self {
        let message = value.as_string().unwrap_or_else(|| format!("{value:?}"));
        Self::Js(message)
    }
}

impl From<HostError> for JsValue {
    fn from(err: HostError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
