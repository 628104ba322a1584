//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `setup.rs` - New game layout and selection
//! - `movement.rs` - Piece rules, line of sight, captures, the king veto
//! - `castling.rs` - Castling preconditions and the attacked-path abort
//! - `en_passant.rs` - The one-ply special-move window
//! - `notation.rs` - Move log notation and disambiguation
//! - `proptest.rs` - Property-based tests over random games

mod setup;

use crate::board::{Coordinate, Game, MoveRecord};

fn sq(s: &str) -> Coordinate {
    s.parse().expect("valid square")
}

/// Play a space-separated list of `from-to` pairs such as `"e2e4 d7d5"`.
fn play_line(game: &mut Game, line: &str) -> Vec<MoveRecord> {
    line.split_whitespace()
        .map(|mv| {
            let (from, to) = mv.split_at(2);
            game.play(sq(from), sq(to))
                .unwrap_or_else(|e| panic!("{mv} should be legal: {e}"))
        })
        .collect()
}
