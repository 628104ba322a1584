//! Error types for board and game operations.

use std::fmt;

use super::{Coordinate, Team};

/// Error type for rejected moves
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// No piece is selected
    NoSelection,
    /// The selected piece cannot reach the destination
    IllegalDestination { from: Coordinate, to: Coordinate },
    /// A square between the king and the castling rook is attacked.
    /// The move is aborted and the special-move memory is cleared.
    CastlingPathAttacked { square: Coordinate },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NoSelection => write!(f, "No piece is selected"),
            MoveError::IllegalDestination { from, to } => {
                write!(f, "Illegal move from {from} to {to}")
            }
            MoveError::CastlingPathAttacked { square } => {
                write!(f, "Cannot castle: {square} is under attack")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for coordinate parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordinateError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColumnOutOfBounds { column: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for CoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            CoordinateError::ColumnOutOfBounds { column } => {
                write!(f, "Column {column} out of bounds (must be 0-7)")
            }
            CoordinateError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for CoordinateError {}

/// Error type for custom position setup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// A team has no king
    MissingKing { team: Team },
    /// A team has more than 16 pieces
    TooManyPieces { team: Team, count: usize },
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::MissingKing { team } => write!(f, "{team} has no king"),
            SetupError::TooManyPieces { team, count } => {
                write!(f, "{team} has {count} pieces (at most 16 allowed)")
            }
        }
    }
}

impl std::error::Error for SetupError {}
