use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tetromino::core::{Piece, SimpleRng};
use tetromino::types::{Position, ShapeKind};

fn bench_cells(c: &mut Criterion) {
    let piece = Piece::new(ShapeKind::T, Position::new(10, 4), -7);

    c.bench_function("piece_cells", |b| {
        b.iter(|| black_box(piece).cells())
    });
}

fn bench_all_orientations(c: &mut Criterion) {
    c.bench_function("cells_all_shapes_all_rotations", |b| {
        b.iter(|| {
            for shape in ShapeKind::ALL {
                for rot in 0..4 {
                    black_box(Piece::new(shape, Position::new(0, 0), black_box(rot)).cells());
                }
            }
        })
    });
}

fn bench_transforms(c: &mut Criterion) {
    let piece = Piece::new(ShapeKind::L, Position::new(5, 5), 0);

    c.bench_function("move_then_rotate", |b| {
        b.iter(|| black_box(piece).moved(1, -1).rotated(true))
    });
}

fn bench_spawn(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);

    c.bench_function("spawn_seeded", |b| {
        b.iter(|| Piece::spawn_from(black_box(10), &mut rng))
    });

    c.bench_function("spawn_thread_rng", |b| b.iter(|| Piece::spawn(black_box(10))));
}

criterion_group!(
    benches,
    bench_cells,
    bench_all_orientations,
    bench_transforms,
    bench_spawn
);
criterion_main!(benches);
