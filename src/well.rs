//! Well: a bounds-only board that accepts or rejects candidate pieces.
//!
//! The core hands out candidate geometries; the well keeps a candidate only when
//! every cell lies inside `0..height` rows and `0..width` columns. There are no
//! locked cells, line clears or scoring.

use tracing::debug;

use crate::core::{Piece, ShapeSource};
use crate::term::Scene;
use crate::types::PieceAction;

pub struct Well<S> {
    width: u16,
    height: u16,
    active: Piece,
    source: S,
}

impl<S: ShapeSource> Well<S> {
    pub fn new(width: u16, height: u16, mut source: S) -> Self {
        let active = Piece::spawn_from(width as i32, &mut source);
        Self {
            width,
            height,
            active,
            source,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn active(&self) -> Piece {
        self.active
    }

    /// Whether every cell of `piece` is inside the well.
    pub fn fits(&self, piece: &Piece) -> bool {
        piece.cells().iter().all(|cell| {
            (0..self.height as i32).contains(&cell.row)
                && (0..self.width as i32).contains(&cell.column)
        })
    }

    /// Lowest fitting straight-down translation of the active piece.
    ///
    /// `None` when the active piece itself does not fit.
    pub fn ghost(&self) -> Option<Piece> {
        if !self.fits(&self.active) {
            return None;
        }
        let mut ghost = self.active;
        loop {
            let next = ghost.moved(1, 0);
            if !self.fits(&next) {
                return Some(ghost);
            }
            ghost = next;
        }
    }

    /// Apply an action. Returns `false` when the candidate was rejected.
    pub fn apply(&mut self, action: PieceAction) -> bool {
        let candidate = match action {
            PieceAction::MoveLeft => self.active.moved(0, -1),
            PieceAction::MoveRight => self.active.moved(0, 1),
            PieceAction::MoveDown => self.active.moved(1, 0),
            PieceAction::RotateCw => self.active.rotated(true),
            PieceAction::RotateCcw => self.active.rotated(false),
            PieceAction::Drop => match self.ghost() {
                Some(ghost) => ghost,
                None => return false,
            },
            PieceAction::Respawn => {
                self.active = Piece::spawn_from(self.width as i32, &mut self.source);
                debug!(shape = self.active.shape().as_str(), "respawned");
                return true;
            }
        };

        if self.fits(&candidate) {
            self.active = candidate;
            true
        } else {
            debug!(action = action.as_str(), ?candidate, "rejected candidate");
            false
        }
    }

    pub fn scene(&self) -> Scene {
        Scene {
            width: self.width,
            height: self.height,
            active: self.active,
            ghost: self.ghost(),
        }
    }
}
