//! Browser-facing helpers kept apart from component code so they can be tested natively.

pub mod canvas_input;
pub mod frame_loop;
pub mod host;
