use tetromino::core::{ShapeSource, BOARD_COLOR};
use tetromino::term::{SceneView, Viewport};
use tetromino::types::{PieceAction, ShapeKind};
use tetromino::well::Well;

struct Always(ShapeKind);

impl ShapeSource for Always {
    fn next_shape(&mut self) -> ShapeKind {
        self.0
    }
}

#[test]
fn scene_renders_border_corners() {
    let well = Well::new(10, 20, Always(ShapeKind::T));
    let view = SceneView::default();

    // With cell_w=2 and cell_h=1:
    // well pixels = 10*2 by 20*1 => 20x20, plus border => 22x22
    let fb = view.render(&well.scene(), Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn ghost_is_drawn_on_the_floor_in_ghost_color() {
    let well = Well::new(10, 20, Always(ShapeKind::O));
    let scene = well.scene();
    let fb = SceneView::default().render(&scene, Viewport::new(22, 22));

    // O ghost anchor (18, 4): bottom row 19, column 4 -> x = 1 + 8, y = 1 + 19.
    let cell = fb.get(9, 20).unwrap();
    assert_eq!(cell.ch, '░');
    assert_eq!(cell.style.fg, scene.active.ghost_color());
    assert_eq!(cell.style.bg, BOARD_COLOR);
}

#[test]
fn active_piece_covers_ghost_after_drop() {
    let mut well = Well::new(10, 20, Always(ShapeKind::O));
    assert!(well.apply(PieceAction::Drop));
    let fb = SceneView::default().render(&well.scene(), Viewport::new(22, 22));

    let cell = fb.get(9, 20).unwrap();
    assert_eq!(cell.ch, '█');
    assert_eq!(cell.style.fg, well.active().color());
}

#[test]
fn side_panel_shows_piece_state_when_wide_enough() {
    let mut well = Well::new(10, 20, Always(ShapeKind::J));
    well.apply(PieceAction::MoveDown);
    well.apply(PieceAction::RotateCcw);

    let fb = SceneView::default().render(&well.scene(), Viewport::new(60, 22));
    let all: String = (0..fb.height()).map(|y| fb.row_text(y)).collect::<Vec<_>>().join("\n");

    assert!(all.contains("SHAPE"));
    assert!(all.contains("ROTATION"));
    assert!(all.contains("-1"));
    assert!(all.contains("ANCHOR"));
    assert!(all.contains("1,4"));
}
