//! Client-side state shared between DOM listeners and the frame loop.

pub mod input_tracker;
