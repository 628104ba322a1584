mod logging;

pub mod board;
pub mod console;

pub use board::{Coordinate, Game, GameBuilder, MoveError, Piece, PieceKind, Team};
pub use console::{run_console_loop, Console};
