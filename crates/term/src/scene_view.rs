//! SceneView: draws a well, the active piece and its ghost into a framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Piece, BOARD_COLOR};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Position;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Everything the view needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scene {
    /// Well size in board cells.
    pub width: u16,
    pub height: u16,
    pub active: Piece,
    /// Landing preview, drawn under the active piece.
    pub ghost: Option<Piece>,
}

pub struct SceneView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for SceneView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

/// Top-left of the well interior in terminal coordinates.
#[derive(Debug, Clone, Copy)]
struct Origin {
    x: u16,
    y: u16,
}

impl SceneView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    pub fn render_into(&self, scene: &Scene, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let well_px_w = scene.width.saturating_mul(self.cell_w);
        let well_px_h = scene.height.saturating_mul(self.cell_h);
        let frame_w = well_px_w.saturating_add(2);
        let frame_h = well_px_h.saturating_add(2);

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;
        let origin = Origin {
            x: start_x + 1,
            y: start_y + 1,
        };

        let empty = CellStyle {
            fg: Rgb::new(90, 90, 100),
            bg: BOARD_COLOR,
            bold: false,
            dim: true,
        };
        for row in 0..scene.height {
            for col in 0..scene.width {
                self.fill_cell(fb, origin, col, row, '·', empty);
            }
        }

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        if let Some(ghost) = scene.ghost {
            let style = CellStyle::new(ghost.ghost_color(), BOARD_COLOR);
            self.draw_piece(fb, scene, origin, &ghost, '░', style);
        }

        let active = CellStyle {
            bold: true,
            ..CellStyle::new(scene.active.color(), BOARD_COLOR)
        };
        self.draw_piece(fb, scene, origin, &scene.active, '█', active);

        draw_side_panel(fb, &scene.active, viewport, start_x.saturating_add(frame_w), start_y);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, scene: &Scene, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(scene, viewport, &mut fb);
        fb
    }

    fn draw_piece(
        &self,
        fb: &mut FrameBuffer,
        scene: &Scene,
        origin: Origin,
        piece: &Piece,
        ch: char,
        style: CellStyle,
    ) {
        for cell in piece.cells() {
            if let Some((col, row)) = well_cell(scene, cell) {
                self.fill_cell(fb, origin, col, row, ch, style);
            }
        }
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        origin: Origin,
        col: u16,
        row: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = origin.x.saturating_add(col.saturating_mul(self.cell_w));
        let py = origin.y.saturating_add(row.saturating_mul(self.cell_h));
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }
}

/// Board cell to well-local `(column, row)`, or `None` when clipped.
fn well_cell(scene: &Scene, cell: Position) -> Option<(u16, u16)> {
    let col = u16::try_from(cell.column).ok()?;
    let row = u16::try_from(cell.row).ok()?;
    (col < scene.width && row < scene.height).then_some((col, row))
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn draw_side_panel(
    fb: &mut FrameBuffer,
    piece: &Piece,
    viewport: Viewport,
    frame_right: u16,
    top: u16,
) {
    let panel_x = frame_right.saturating_add(2);
    if panel_x >= viewport.width || viewport.width - panel_x < 12 {
        return;
    }

    let label = CellStyle {
        bold: true,
        ..CellStyle::default()
    };
    let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

    let anchor = piece.anchor();
    let lines = [
        ("SHAPE", piece.shape().glyph().to_string()),
        ("ROTATION", piece.rotation().to_string()),
        ("VARIANT", piece.variant().to_string()),
        ("ANCHOR", format!("{},{}", anchor.row, anchor.column)),
    ];

    let mut y = top;
    for (name, text) in lines {
        fb.put_str(panel_x, y, name, label);
        fb.put_str(panel_x, y.saturating_add(1), &text, value);
        y = y.saturating_add(3);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ShapeKind;

    fn scene(piece: Piece) -> Scene {
        Scene {
            width: 10,
            height: 20,
            active: piece,
            ghost: None,
        }
    }

    #[test]
    fn active_piece_uses_primary_color() {
        let piece = Piece::new(ShapeKind::T, Position::new(5, 4), 0);
        let fb = SceneView::default().render(&scene(piece), Viewport::new(22, 22));

        // Interior origin (1,1), cell (5,4) -> x = 1 + 8, y = 1 + 5.
        let cell = fb.get(9, 6).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, piece.color());
        assert_eq!(fb.get(10, 6).unwrap().ch, '█');
    }

    #[test]
    fn cells_outside_the_well_are_clipped() {
        // Vertical I reaching two rows above the top edge.
        let piece = Piece::new(ShapeKind::I, Position::new(0, 0), 3);
        let fb = SceneView::default().render(&scene(piece), Viewport::new(22, 22));

        // Border row stays intact.
        assert_eq!(fb.get(1, 0).unwrap().ch, '─');
        assert_eq!(fb.get(1, 1).unwrap().ch, '█');
        assert_eq!(fb.get(1, 2).unwrap().ch, '█');
    }
}
