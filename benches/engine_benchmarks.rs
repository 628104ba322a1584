//! Benchmarks for rules engine performance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_match::board::{move_guide, Coordinate, Game, GameBuilder, PieceKind, Team};

fn play(game: &mut Game, line: &str) {
    for mv in line.split_whitespace() {
        let (from, to) = mv.split_at(2);
        let from: Coordinate = from.parse().expect("bad square");
        let to: Coordinate = to.parse().expect("bad square");
        game.play(from, to).expect("illegal move in benchmark line");
    }
}

fn middlegame() -> Game {
    let mut game = Game::new();
    play(
        &mut game,
        "e2e4 e7e5 g1f3 b8c6 f1c4 f8c5 e1g1 g8f6 d2d3 e8g8 b1c3 d7d6",
    );
    game
}

fn open_board() -> Game {
    GameBuilder::new()
        .piece(Coordinate::new(7, 4), Team::White, PieceKind::King)
        .piece(Coordinate::new(0, 4), Team::Black, PieceKind::King)
        .piece(Coordinate::new(4, 3), Team::White, PieceKind::Queen)
        .piece(Coordinate::new(7, 0), Team::White, PieceKind::Rook)
        .piece(Coordinate::new(7, 7), Team::White, PieceKind::Rook)
        .piece(Coordinate::new(3, 3), Team::Black, PieceKind::Queen)
        .piece(Coordinate::new(2, 5), Team::Black, PieceKind::Knight)
        .build()
}

fn bench_move_guides(c: &mut Criterion) {
    let mut group = c.benchmark_group("move_guide");

    for (name, game) in [
        ("startpos", Game::new()),
        ("middlegame", middlegame()),
        ("open", open_board()),
    ] {
        group.bench_with_input(BenchmarkId::new("all_pieces", name), &game, |b, game| {
            b.iter(|| {
                for piece in game.active_pieces(game.turn()) {
                    black_box(move_guide(game.board(), piece, None));
                }
            })
        });
    }

    group.finish();
}

fn bench_attacks(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_position_checked");

    let game = middlegame();
    group.bench_function("middlegame_all_squares", |b| {
        b.iter(|| {
            Coordinate::all()
                .filter(|&at| game.is_position_checked(black_box(at), Team::White))
                .count()
        })
    });

    let game = open_board();
    group.bench_function("open_all_squares", |b| {
        b.iter(|| {
            Coordinate::all()
                .filter(|&at| game.is_position_checked(black_box(at), Team::White))
                .count()
        })
    });

    group.finish();
}

fn bench_legal_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("legal_moves");

    let startpos = Game::new();
    group.bench_function("startpos", |b| b.iter(|| black_box(startpos.legal_moves())));

    let game = middlegame();
    group.bench_function("middlegame", |b| b.iter(|| black_box(game.legal_moves())));

    group.finish();
}

fn bench_play_line(c: &mut Criterion) {
    c.bench_function("play_opening_line", |b| {
        b.iter(|| black_box(middlegame()))
    });
}

criterion_group!(
    benches,
    bench_move_guides,
    bench_attacks,
    bench_legal_moves,
    bench_play_line
);
criterion_main!(benches);
