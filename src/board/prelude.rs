//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_match::board::prelude::*;
//!
//! let game = Game::new();
//! assert_eq!(game.turn(), Team::White);
//! ```

pub use super::{
    Board, Coordinate, Game, GameBuilder, MoveError, MoveKind, MoveLog, MoveRecord, Piece,
    PieceId, PieceKind, Team,
};
