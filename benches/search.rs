use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pelanca_reversi::search::{Minimax, ParallelDispatcher, Strategy, WeightTables};
use pelanca_reversi::{Board, Engine, EngineConfig, OpeningBook, Player, Policy};
use std::sync::Arc;

fn midgame() -> Board {
    let mut board = Board::new();
    let mut player = Player::Black;
    for token in "f5 d6 c3 d3 c4 f4 f6 f3 e6 e7".split_whitespace() {
        board = board.apply_move(player, token.parse().unwrap()).unwrap();
        player = !player;
    }
    board
}

fn bench_legal_moves(c: &mut Criterion) {
    let board = midgame();
    c.bench_function("legal_moves_midgame", |b| {
        b.iter(|| black_box(&board).legal_moves(Player::Black))
    });
}

fn bench_search_root(c: &mut Criterion) {
    let board = midgame();
    let heuristic = Strategy::Composite.build(Arc::new(WeightTables::standard()));
    let search = Minimax::new();

    let mut group = c.benchmark_group("search_root_depth_4");
    for workers in [1, 4] {
        let dispatcher = ParallelDispatcher::new(workers).unwrap();
        group.bench_function(format!("workers_{}", workers), |b| {
            b.iter(|| {
                search
                    .search_root(black_box(&board), Player::Black, 4, heuristic.as_ref(), &dispatcher)
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_select_move(c: &mut Criterion) {
    let board = midgame();
    let config = EngineConfig::default().with_policy(Policy::Search).with_depth(3);
    let mut engine = Engine::new(config).unwrap();
    c.bench_function("select_move_depth_3", |b| {
        b.iter(|| engine.select_move(black_box(&board), Player::Black).unwrap())
    });

    c.bench_function("opening_book_build", |b| b.iter(|| OpeningBook::standard().unwrap()));
}

criterion_group!(benches, bench_legal_moves, bench_search_root, bench_select_move);
criterion_main!(benches);
