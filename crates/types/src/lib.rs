//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (geometry, terminal rendering, input mapping).
//!
//! # Coordinates
//!
//! Board coordinates are `(row, column)` pairs. Row 0 is the top of a board and
//! rows grow downward; column 0 is the left edge.
//!
//! - [`CellOffset`]: small signed offset of one cell relative to a piece anchor
//! - [`Position`]: absolute board cell, wide enough for any anchor arithmetic
//!
//! # Board Dimensions
//!
//! Default well used by the viewer:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//!
//! # Examples
//!
//! ```
//! use tetromino_types::{PieceAction, Position, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! // Parse a shape tag (case-insensitive)
//! let shape = ShapeKind::from_str("t").unwrap();
//! assert_eq!(shape, ShapeKind::T);
//!
//! // Offset a position by a cell offset
//! let cell = Position::new(0, 4).offset_by((1, -1));
//! assert_eq!(cell, Position::new(1, 3));
//!
//! // Parse a viewer action
//! assert_eq!(PieceAction::from_str("rotateCw"), Some(PieceAction::RotateCw));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in columns (10)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in rows (20)
pub const BOARD_HEIGHT: u8 = 20;

/// Offset of a single cell relative to a piece anchor, as `(row, column)`
pub type CellOffset = (i8, i8);

/// The seven tetromino shapes, plus an explicit unknown tag
///
/// Each known shape has a distinct layout and color:
/// - **I**: Cyan, straight bar
/// - **O**: Yellow, 2x2 square (single orientation)
/// - **T**: Purple, T-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
///
/// `Unknown` is never produced by parsing or by the spawn factory. It exists so
/// that lookups stay total: it resolves to four zero offsets and the board color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
    Unknown,
}

impl ShapeKind {
    /// The seven known shapes in canonical order
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::J,
        ShapeKind::L,
    ];

    /// Parse shape from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetromino_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("i"), Some(ShapeKind::I));
    /// assert_eq!(ShapeKind::from_str("Z"), Some(ShapeKind::Z));
    /// assert_eq!(ShapeKind::from_str("?"), None);
    /// assert_eq!(ShapeKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(ShapeKind::I),
            "o" => Some(ShapeKind::O),
            "t" => Some(ShapeKind::T),
            "s" => Some(ShapeKind::S),
            "z" => Some(ShapeKind::Z),
            "j" => Some(ShapeKind::J),
            "l" => Some(ShapeKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "i",
            ShapeKind::O => "o",
            ShapeKind::T => "t",
            ShapeKind::S => "s",
            ShapeKind::Z => "z",
            ShapeKind::J => "j",
            ShapeKind::L => "l",
            ShapeKind::Unknown => "?",
        }
    }

    /// Uppercase letter used for display
    pub fn glyph(&self) -> char {
        match self {
            ShapeKind::I => 'I',
            ShapeKind::O => 'O',
            ShapeKind::T => 'T',
            ShapeKind::S => 'S',
            ShapeKind::Z => 'Z',
            ShapeKind::J => 'J',
            ShapeKind::L => 'L',
            ShapeKind::Unknown => '?',
        }
    }

    /// `false` only for [`ShapeKind::Unknown`]
    pub fn is_known(&self) -> bool {
        !matches!(self, ShapeKind::Unknown)
    }
}

/// An absolute cell in board coordinates
///
/// Arithmetic wraps on overflow so that translation stays a total function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: i32,
    pub column: i32,
}

impl Position {
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// Add a relative cell offset
    ///
    /// # Examples
    ///
    /// ```
    /// use tetromino_types::Position;
    ///
    /// assert_eq!(Position::new(5, 5).offset_by((-2, 1)), Position::new(3, 6));
    /// ```
    pub fn offset_by(self, (d_row, d_column): CellOffset) -> Self {
        self.translated(d_row as i32, d_column as i32)
    }

    /// Translate by whole rows and columns
    pub fn translated(self, d_row: i32, d_column: i32) -> Self {
        Self {
            row: self.row.wrapping_add(d_row),
            column: self.column.wrapping_add(d_column),
        }
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Actions a board collaborator can apply to the active piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceAction {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Move piece one row down
    MoveDown,
    /// Rotate piece clockwise
    RotateCw,
    /// Rotate piece counter-clockwise
    RotateCcw,
    /// Snap piece to its lowest reachable row
    Drop,
    /// Replace the piece with a freshly spawned one
    Respawn,
}

impl PieceAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetromino_types::PieceAction;
    ///
    /// assert_eq!(PieceAction::from_str("moveLeft"), Some(PieceAction::MoveLeft));
    /// assert_eq!(PieceAction::from_str("DROP"), Some(PieceAction::Drop));
    /// assert_eq!(PieceAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(PieceAction::MoveLeft),
            "moveright" => Some(PieceAction::MoveRight),
            "movedown" => Some(PieceAction::MoveDown),
            "rotatecw" => Some(PieceAction::RotateCw),
            "rotateccw" => Some(PieceAction::RotateCcw),
            "drop" => Some(PieceAction::Drop),
            "respawn" => Some(PieceAction::Respawn),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceAction::MoveLeft => "moveLeft",
            PieceAction::MoveRight => "moveRight",
            PieceAction::MoveDown => "moveDown",
            PieceAction::RotateCw => "rotateCw",
            PieceAction::RotateCcw => "rotateCcw",
            PieceAction::Drop => "drop",
            PieceAction::Respawn => "respawn",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_tags_round_trip_for_known_shapes() {
        for shape in ShapeKind::ALL {
            assert_eq!(ShapeKind::from_str(shape.as_str()), Some(shape));
            assert!(shape.is_known());
        }
    }

    #[test]
    fn all_excludes_unknown() {
        assert!(!ShapeKind::ALL.contains(&ShapeKind::Unknown));
        assert!(!ShapeKind::Unknown.is_known());
        assert_eq!(ShapeKind::Unknown.glyph(), '?');
        assert_eq!(ShapeKind::from_str(ShapeKind::Unknown.as_str()), None);
    }

    #[test]
    fn position_translation_wraps_instead_of_panicking() {
        let p = Position::new(i32::MAX, i32::MIN);
        assert_eq!(p.translated(1, -1), Position::new(i32::MIN, i32::MAX));
    }

    #[test]
    fn action_strings_round_trip() {
        for action in [
            PieceAction::MoveLeft,
            PieceAction::MoveRight,
            PieceAction::MoveDown,
            PieceAction::RotateCw,
            PieceAction::RotateCcw,
            PieceAction::Drop,
            PieceAction::Respawn,
        ] {
            assert_eq!(PieceAction::from_str(action.as_str()), Some(action));
        }
    }
}
