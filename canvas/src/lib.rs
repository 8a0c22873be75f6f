//! Interaction and rendering core for the infinite canvas demo.
//!
//! The crate owns everything that is not the host: the view offset, the
//! pan/draw gesture state machine, the list of freehand paths, and the layered
//! scene drawing. The host (see the `client` crate) owns the surface, the input
//! devices, and the frame scheduler; each frame it hands the controller an
//! [`input::InputSnapshot`] and a [`render::RenderTarget`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::Game`] trait, [`engine::CanvasController`], and [`engine::run_frame`] |
//! | [`input`] | Input source trait, per-frame snapshots, and the interaction mode |
//! | [`path`] | Freehand paths and the append-only store of committed paths |
//! | [`view`] | Points, view offset, and grid/overlay coordinate math |
//! | [`render`] | Render target trait, draw-call recorder, and scene drawing |
//! | [`canvas2d`] | Render target over `CanvasRenderingContext2d` |
//! | [`config`] | Configuration defaults, JSON overrides, and validation |
//! | [`consts`] | Shared constants (surface size, pan step, grid geometry, overlay text) |

pub mod canvas2d;
pub mod config;
pub mod consts;
pub mod engine;
pub mod input;
pub mod path;
pub mod render;
pub mod view;
