//! Shapes module - tetromino orientation tables
//!
//! Every orientation is a literal lookup: there is no runtime matrix rotation.
//! Offsets are `(row, column)` relative to the piece anchor, rows grow downward.
//! The order of the four offsets inside a variant is stable and is the order in
//! which [`crate::Piece::cells`] reports cells.

use crate::types::{CellOffset, ShapeKind};

/// One orientation frame: the 4 cell offsets of a shape
pub type Variant = [CellOffset; 4];

/// I piece: horizontal, vertical right of anchor, horizontal above, vertical on anchor
const I_VARIANTS: [Variant; 4] = [
    [(0, -1), (0, 0), (0, 1), (0, 2)],
    [(-1, 1), (0, 1), (1, 1), (-2, 1)],
    [(-1, -1), (-1, 0), (-1, 1), (-1, 2)],
    [(-1, 0), (0, 0), (1, 0), (-2, 0)],
];

/// O piece has a single orientation
const O_VARIANTS: [Variant; 1] = [[(0, 0), (0, 1), (1, 1), (1, 0)]];

const T_VARIANTS: [Variant; 4] = [
    [(0, -1), (0, 0), (0, 1), (1, 0)],
    [(-1, 0), (0, 0), (0, 1), (1, 0)],
    [(0, -1), (0, 0), (0, 1), (-1, 0)],
    [(0, -1), (0, 0), (1, 0), (-1, 0)],
];

const S_VARIANTS: [Variant; 4] = [
    [(0, -1), (0, 0), (1, 0), (1, 1)],
    [(1, 0), (0, 0), (0, 1), (-1, 1)],
    [(0, 1), (0, 0), (-1, 1), (-1, -1)],
    [(1, -1), (0, -1), (0, 0), (-1, 0)],
];

/// Z piece sits one row lower than the others at rotation 0; see `spawn_anchor`
const Z_VARIANTS: [Variant; 4] = [
    [(1, -1), (1, 0), (0, 0), (0, 1)],
    [(1, 1), (0, 1), (0, 0), (-1, 0)],
    [(0, -1), (0, 0), (-1, 0), (-1, 1)],
    [(1, 0), (0, 0), (0, -1), (-1, -1)],
];

const J_VARIANTS: [Variant; 4] = [
    [(1, -1), (0, -1), (0, 0), (0, 1)],
    [(1, 0), (0, 0), (-1, 0), (1, 1)],
    [(-1, 1), (0, -1), (0, 0), (0, 1)],
    [(1, 0), (0, 0), (-1, 0), (-1, -1)],
];

const L_VARIANTS: [Variant; 4] = [
    [(0, -1), (0, 0), (0, 1), (1, 1)],
    [(1, 0), (0, 0), (-1, 0), (-1, 1)],
    [(0, -1), (0, 0), (0, 1), (-1, -1)],
    [(1, 0), (0, 0), (-1, 0), (1, -1)],
];

/// Degenerate fallback for an unrecognized shape: one cell, four times
const UNKNOWN_VARIANTS: [Variant; 1] = [[(0, 0); 4]];

/// All orientation frames of a shape, in clockwise order starting at spawn
pub fn variants(shape: ShapeKind) -> &'static [Variant] {
    match shape {
        ShapeKind::I => &I_VARIANTS,
        ShapeKind::O => &O_VARIANTS,
        ShapeKind::T => &T_VARIANTS,
        ShapeKind::S => &S_VARIANTS,
        ShapeKind::Z => &Z_VARIANTS,
        ShapeKind::J => &J_VARIANTS,
        ShapeKind::L => &L_VARIANTS,
        ShapeKind::Unknown => &UNKNOWN_VARIANTS,
    }
}

/// Number of distinct orientations (4, or 1 for `O`)
pub fn variant_count(shape: ShapeKind) -> usize {
    variants(shape).len()
}

/// Normalize an unbounded rotation counter into `[0, variant_count)`.
///
/// Negative counters wrap floor-style: `-1` is the last variant, not an error.
pub fn variant_index(shape: ShapeKind, rotation: i32) -> usize {
    rotation.rem_euclid(variant_count(shape) as i32) as usize
}

/// Get the 4 cell offsets for a shape at any rotation counter
pub fn offsets_for(shape: ShapeKind, rotation: i32) -> Variant {
    variants(shape)[variant_index(shape, rotation)]
}
