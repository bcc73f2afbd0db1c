//! Piece module - the falling tetromino as an immutable value
//!
//! A [`Piece`] is an anchor, a shape and an unbounded rotation counter. Color and
//! occupied cells are derived on demand from the static tables, so they can never
//! drift from the inputs. Transforms return a new piece; nothing here looks at a
//! board, so legality is decided by whoever holds the piece.

use crate::colors::{ghost_color, primary_color};
use crate::rng::{ShapeSource, ThreadShapes};
use crate::shapes::{offsets_for, variant_index, Variant};
use crate::types::{Position, Rgb, ShapeKind};

/// A tetromino positioned on a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    anchor: Position,
    shape: ShapeKind,
    rotation: i32,
}

impl Piece {
    pub fn new(shape: ShapeKind, anchor: Position, rotation: i32) -> Self {
        Self {
            anchor,
            shape,
            rotation,
        }
    }

    /// Spawn a piece of uniformly random shape for a board `column` wide
    pub fn spawn(column: i32) -> Self {
        Self::spawn_from(column, ThreadShapes)
    }

    /// Spawn with an explicit shape source
    pub fn spawn_from(column: i32, mut source: impl ShapeSource) -> Self {
        let shape = source.next_shape();
        let anchor = spawn_anchor(shape, column);
        tracing::trace!(shape = shape.as_str(), column, ?anchor, "spawned piece");
        Self::new(shape, anchor, 0)
    }

    pub fn anchor(&self) -> Position {
        self.anchor
    }

    pub fn shape(&self) -> ShapeKind {
        self.shape
    }

    /// Raw rotation counter, possibly negative or beyond the variant count
    pub fn rotation(&self) -> i32 {
        self.rotation
    }

    /// Effective orientation index in `[0, variant_count)`
    pub fn variant(&self) -> usize {
        variant_index(self.shape, self.rotation)
    }

    /// Cell offsets of the current orientation, relative to the anchor
    pub fn offsets(&self) -> Variant {
        offsets_for(self.shape, self.rotation)
    }

    /// The 4 board cells this piece occupies, in table order
    pub fn cells(&self) -> [Position; 4] {
        self.offsets().map(|offset| self.anchor.offset_by(offset))
    }

    pub fn color(&self) -> Rgb {
        primary_color(self.shape)
    }

    pub fn ghost_color(&self) -> Rgb {
        ghost_color(self.shape)
    }

    /// Translate by `d_row` rows and `d_column` columns.
    #[must_use]
    pub fn moved(self, d_row: i32, d_column: i32) -> Self {
        Self {
            anchor: self.anchor.translated(d_row, d_column),
            ..self
        }
    }

    /// Rotate one step around the anchor. The anchor never shifts (no kicks).
    #[must_use]
    pub fn rotated(self, clockwise: bool) -> Self {
        let step = if clockwise { 1 } else { -1 };
        Self {
            rotation: self.rotation.wrapping_add(step),
            ..self
        }
    }
}

/// Anchor for a freshly spawned piece on a board `column` wide.
///
/// `Z` starts one row lower because its rotation-0 frame reaches below the
/// anchor; every other shape starts on row 0. Column division truncates.
pub fn spawn_anchor(shape: ShapeKind, column: i32) -> Position {
    let row = if shape == ShapeKind::Z { 1 } else { 0 };
    Position::new(row, column.wrapping_sub(1) / 2)
}
