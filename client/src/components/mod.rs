//! UI components.

pub mod canvas_host;
