//! Tetromino (workspace facade crate).
//!
//! Re-exports the member crates under `tetromino::{core,input,term,types}` and
//! hosts [`well::Well`], the bounds-only board used by the viewer binary.

pub mod well;

pub use tetromino_core as core;
pub use tetromino_input as input;
pub use tetromino_term as term;
pub use tetromino_types as types;
