//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::PieceAction`]. The viewer
//! redraws on every key press, so there is no DAS/ARR repeat handling here.

pub mod map;

pub use tetromino_types as types;

pub use map::{handle_key_event, should_quit};
