//! Piece geometry - pure, deterministic, and testable
//!
//! This crate models a single falling tetromino: its shape, anchor, rotation
//! counter and color, plus the pure functions that derive a new piece from a
//! move or rotation. It never looks at a board. Deciding whether a candidate
//! piece fits is the caller's job.
//!
//! # Module Structure
//!
//! - [`shapes`]: literal orientation tables for the seven tetrominoes
//! - [`colors`]: primary and ghost colors per shape
//! - [`piece`]: the [`Piece`] value type, its transforms and the spawn factory
//! - [`rng`]: uniform shape selection behind [`ShapeSource`]
//!
//! # Rotation
//!
//! A piece carries an unbounded signed rotation counter. The effective orientation
//! is the counter modulo the shape's variant count (4, or 1 for `O`), wrapping
//! floor-style so that `-1` means the last orientation. Rotation never moves the
//! anchor; there are no wall kicks.
//!
//! # Example
//!
//! ```
//! use tetromino_core::{Piece, SimpleRng};
//! use tetromino_core::types::{Position, ShapeKind};
//!
//! // A horizontal I bar around the origin
//! let bar = Piece::new(ShapeKind::I, Position::new(0, 0), 0);
//! assert_eq!(bar.cells()[0], Position::new(0, -1));
//!
//! // Transforms return new values
//! let candidate = bar.moved(1, 0).rotated(true);
//! assert_eq!(candidate.anchor(), Position::new(1, 0));
//! assert_eq!(bar.anchor(), Position::new(0, 0));
//!
//! // Reproducible spawning on a 10-wide board
//! let piece = Piece::spawn_from(10, SimpleRng::new(7));
//! assert_eq!(piece.anchor().column, 4);
//! ```
//!
//! All lookups are total: [`ShapeKind::Unknown`](types::ShapeKind::Unknown)
//! resolves to four zero offsets and [`BOARD_COLOR`].

pub mod colors;
pub mod piece;
pub mod rng;
pub mod shapes;

pub use tetromino_types as types;

pub use colors::{ghost_color, primary_color, BOARD_COLOR};
pub use piece::{spawn_anchor, Piece};
pub use rng::{ShapeSource, SimpleRng, ThreadShapes};
pub use shapes::{offsets_for, variant_count, variant_index, variants, Variant};
