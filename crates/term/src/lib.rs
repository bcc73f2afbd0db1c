//! Terminal rendering for the piece viewer.
//!
//! Renders into a simple framebuffer that is flushed to a terminal backend,
//! without ratatui widgets or layout.
//!
//! - [`fb`]: framebuffer and cell styles
//! - [`scene_view`]: well, ghost and active piece, 2 chars wide per board cell
//! - [`renderer`]: raw mode, alternate screen and buffered flushing

pub mod fb;
pub mod renderer;
pub mod scene_view;

pub use tetromino_core as core;
pub use tetromino_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_full_into, TerminalRenderer};
pub use scene_view::{Scene, SceneView, Viewport};
