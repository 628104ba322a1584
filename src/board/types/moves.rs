//! Move classification and committed-move records.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::coord::Coordinate;
use super::piece::PieceId;

/// Which rook a castling king heads for.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    /// Toward the h-file rook.
    King,
    /// Toward the a-file rook.
    Queen,
}

impl CastleSide {
    /// Column step from king toward the rook.
    #[inline]
    #[must_use]
    pub const fn direction(self) -> isize {
        match self {
            CastleSide::King => 1,
            CastleSide::Queen => -1,
        }
    }

    /// Column of the rook before castling.
    #[inline]
    #[must_use]
    pub const fn rook_column(self) -> usize {
        match self {
            CastleSide::King => 7,
            CastleSide::Queen => 0,
        }
    }

    /// Column the rook lands on, next to the king's new square.
    #[inline]
    #[must_use]
    pub const fn rook_target_column(self) -> usize {
        match self {
            CastleSide::King => 5,
            CastleSide::Queen => 3,
        }
    }

    #[must_use]
    pub const fn notation(self) -> &'static str {
        match self {
            CastleSide::King => "O-O",
            CastleSide::Queen => "O-O-O",
        }
    }
}

/// What a legal move does, as decided by the piece's legality check.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveKind {
    /// Onto an empty cell.
    Quiet,
    /// Onto a cell holding an opposing piece.
    Capture,
    /// Pawn two-square advance from its home row.
    DoubleStep,
    /// Pawn diagonal onto an empty cell, taking the pawn beside it.
    EnPassant,
    Castle(CastleSide),
}

impl MoveKind {
    /// Moves that arm the one-ply special-move memory.
    #[inline]
    #[must_use]
    pub const fn is_special(self) -> bool {
        matches!(self, MoveKind::DoubleStep | MoveKind::Castle(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        matches!(self, MoveKind::Capture | MoveKind::EnPassant)
    }
}

/// Summary of a committed move.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveRecord {
    pub piece: PieceId,
    pub from: Coordinate,
    pub to: Coordinate,
    pub kind: MoveKind,
    pub captured: Option<PieceId>,
    pub notation: String,
}
