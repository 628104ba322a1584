//! Core chess types.
//!
//! This module contains the fundamental types used throughout the rules engine:
//! - `Coordinate` - (row, column) cell address with algebraic names
//! - `Piece`, `PieceKind`, `PieceId` and `Team` - arena piece records
//! - `MoveKind`, `CastleSide` and `MoveRecord` - move classification

mod coord;
mod moves;
mod piece;

pub use coord::Coordinate;
pub use moves::{CastleSide, MoveKind, MoveRecord};
pub use piece::{Piece, PieceId, PieceKind, Team};
