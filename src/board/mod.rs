//! Chess board representation and rules engine.
//!
//! An 8×8 grid of piece ids backed by an arena of piece records, per-piece
//! movement rules, and the `Game` engine that runs turns, selection, move
//! guides, castling, en passant, captures and move notation.
//!
//! Not implemented: promotion, checkmate and stalemate detection, and draw
//! rules. Only king moves are vetoed for landing on an attacked square.
//!
//! # Example
//! ```
//! use chess_match::board::{Game, Team};
//!
//! let mut game = Game::new();
//! assert!(game.select("e2".parse().unwrap()));
//! assert!(game.move_piece("e4".parse().unwrap()));
//! assert_eq!(game.move_log().last(), Some("e4"));
//! assert_eq!(game.turn(), Team::Black);
//! ```

mod builder;
mod error;
mod execute;
mod grid;
mod history;
mod movegen;
pub mod prelude;
mod san;
mod sight;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API
pub use builder::GameBuilder;
pub use error::{CoordinateError, MoveError, SetupError};
pub use grid::Board;
pub use history::{MoveLog, Round};
pub use movegen::{is_valid_move, move_guide};
pub use san::{format_move, MoveNotation};
pub use sight::has_line_of_sight;
pub use state::{Game, GameSnapshot};
pub use types::{CastleSide, Coordinate, MoveKind, MoveRecord, Piece, PieceId, PieceKind, Team};
