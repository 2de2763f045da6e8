use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fruit_match::core::{detect_matches, resolve_to_quiescence, Board, GameEngine, SimpleRng};
use fruit_match::types::{Coord, GameMode, Symbol};

fn bench_detect_matches(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);
    let mut board = Board::new();
    board.fill_random(&mut rng);

    c.bench_function("detect_matches_random_board", |b| {
        b.iter(|| detect_matches(black_box(&board)))
    });
}

fn bench_cascade_resolution(c: &mut Criterion) {
    c.bench_function("resolve_full_board_cascade", |b| {
        b.iter(|| {
            // Worst case: the whole board clears on the first pass
            let mut board = Board::from_rows(vec![vec![Some(Symbol::Apple); 8]; 8]);
            let mut rng = SimpleRng::new(12345);
            resolve_to_quiescence(&mut board, &mut rng)
        })
    });
}

fn bench_shuffle(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);
    let mut board = Board::new();
    board.fill_random(&mut rng);

    c.bench_function("board_shuffle", |b| {
        b.iter(|| board.shuffle(&mut rng))
    });
}

fn bench_swap_request(c: &mut Criterion) {
    let mut engine = GameEngine::new(12345);
    engine.select_mode(GameMode::Level);
    engine.drain_events();

    c.bench_function("request_swap", |b| {
        b.iter(|| {
            engine.request_swap(black_box(Coord::new(3, 3)), black_box(Coord::new(3, 4)));
            engine.drain_events()
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut engine = GameEngine::new(12345);
    engine.select_mode(GameMode::Level);

    c.bench_function("snapshot", |b| b.iter(|| black_box(engine.snapshot())));
}

criterion_group!(
    benches,
    bench_detect_matches,
    bench_cascade_resolution,
    bench_shuffle,
    bench_swap_request,
    bench_snapshot
);
criterion_main!(benches);
