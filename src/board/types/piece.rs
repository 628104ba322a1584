//! Piece, kind and team types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Coordinate;

/// Chess piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Back rank layout from the a-file to the h-file.
    pub const BACK_RANK: [PieceKind; 8] = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];

    /// Lowercase letter for this kind
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Letter used in move notation; pawns have none.
    #[inline]
    #[must_use]
    pub const fn notation_letter(self) -> Option<char> {
        match self {
            PieceKind::Pawn => None,
            PieceKind::Knight => Some('N'),
            PieceKind::Bishop => Some('B'),
            PieceKind::Rook => Some('R'),
            PieceKind::Queen => Some('Q'),
            PieceKind::King => Some('K'),
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        }
    }
}

/// The two sides.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Team {
    White,
    Black,
}

impl Team {
    /// Both teams, White first
    pub const BOTH: [Team; 2] = [Team::White, Team::Black];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Team::White => 0,
            Team::Black => 1,
        }
    }

    /// Returns the opposite team
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Team {
        match self {
            Team::White => Team::Black,
            Team::Black => Team::White,
        }
    }

    /// Back rank row (7 for White, 0 for Black)
    #[inline]
    #[must_use]
    pub const fn back_row(self) -> usize {
        match self {
            Team::White => 7,
            Team::Black => 0,
        }
    }

    /// Pawn forward direction in rows (-1 for White, +1 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_direction(self) -> isize {
        match self {
            Team::White => -1,
            Team::Black => 1,
        }
    }

    /// Pawn home row (6 for White, 1 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_home_row(self) -> usize {
        match self {
            Team::White => 6,
            Team::Black => 1,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::White => write!(f, "White"),
            Team::Black => write!(f, "Black"),
        }
    }
}

/// Stable identity of a piece within one game.
///
/// Index into the board's piece arena. Two references to "the same piece"
/// compare equal exactly when their ids do.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PieceId(pub usize);

/// A piece record. Lives in the board arena for the whole game, captured or not.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub id: PieceId,
    pub kind: PieceKind,
    pub team: Team,
    pub position: Coordinate,
    /// Set on the first move. Only kings and rooks consult it.
    pub has_moved: bool,
}

impl Piece {
    #[must_use]
    pub(crate) const fn new(
        id: PieceId,
        kind: PieceKind,
        team: Team,
        position: Coordinate,
    ) -> Self {
        Piece {
            id,
            kind,
            team,
            position,
            has_moved: false,
        }
    }

    /// Single-character identifier: uppercase for White, lowercase for Black.
    #[must_use]
    pub fn symbol(&self) -> char {
        let c = self.kind.to_char();
        match self.team {
            Team::White => c.to_ascii_uppercase(),
            Team::Black => c,
        }
    }

    /// Display name such as "White Rook".
    #[must_use]
    pub fn name(&self) -> String {
        format!("{} {}", self.team, self.kind.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_casing() {
        let white = Piece::new(
            PieceId(0),
            PieceKind::Knight,
            Team::White,
            Coordinate::new(7, 1),
        );
        let black = Piece::new(
            PieceId(1),
            PieceKind::Queen,
            Team::Black,
            Coordinate::new(0, 3),
        );
        assert_eq!(white.symbol(), 'N');
        assert_eq!(black.symbol(), 'q');
        assert_eq!(white.name(), "White Knight");
        assert_eq!(black.name(), "Black Queen");
    }

    #[test]
    fn test_team_geometry() {
        assert_eq!(Team::White.pawn_direction(), -1);
        assert_eq!(Team::Black.pawn_direction(), 1);
        assert_eq!(Team::White.pawn_home_row(), 6);
        assert_eq!(Team::Black.pawn_home_row(), 1);
        assert_eq!(Team::White.opponent(), Team::Black);
    }

    #[test]
    fn test_back_rank_symbols() {
        let symbols: String = PieceKind::BACK_RANK.iter().map(|k| k.to_char()).collect();
        assert_eq!(symbols, "rnbqkbnr");
    }
}
