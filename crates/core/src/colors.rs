//! Color tables for shapes and their ghost preview.
//!
//! Colors depend on the shape alone, never on position or rotation.

use crate::types::{Rgb, ShapeKind};

/// Background of an empty board cell, also the fallback for unknown shapes
pub const BOARD_COLOR: Rgb = Rgb::new(30, 30, 40);

/// Display color of a shape
pub fn primary_color(shape: ShapeKind) -> Rgb {
    match shape {
        ShapeKind::I => Rgb::new(80, 220, 220),
        ShapeKind::O => Rgb::new(240, 220, 80),
        ShapeKind::T => Rgb::new(200, 120, 220),
        ShapeKind::S => Rgb::new(100, 220, 120),
        ShapeKind::Z => Rgb::new(220, 80, 80),
        ShapeKind::J => Rgb::new(80, 120, 220),
        ShapeKind::L => Rgb::new(255, 165, 0),
        ShapeKind::Unknown => BOARD_COLOR,
    }
}

/// Muted color used to preview where a shape would land
pub fn ghost_color(shape: ShapeKind) -> Rgb {
    match shape {
        ShapeKind::I => Rgb::new(45, 100, 105),
        ShapeKind::O => Rgb::new(105, 100, 50),
        ShapeKind::T => Rgb::new(90, 65, 105),
        ShapeKind::S => Rgb::new(55, 100, 70),
        ShapeKind::Z => Rgb::new(100, 50, 55),
        ShapeKind::J => Rgb::new(45, 65, 105),
        ShapeKind::L => Rgb::new(110, 80, 25),
        ShapeKind::Unknown => BOARD_COLOR,
    }
}
