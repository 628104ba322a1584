//! Algebraic move notation.
//!
//! Short algebraic notation with single-letter file disambiguation:
//! `[Piece][originFile][x][dest][promotion][+|#]`. Pawns carry no piece
//! letter and show their origin file only when capturing. Castling is written
//! `O-O` / `O-O-O`, en passant as `exd6 e.p.`.
//!
//! # Examples
//! ```
//! use chess_match::board::{Coordinate, MoveNotation, PieceKind};
//!
//! let (from, to) = (Coordinate::new(7, 6), Coordinate::new(5, 5));
//! let notation = MoveNotation::new(PieceKind::Knight, from, to);
//! assert_eq!(notation.to_string(), "Nf3");
//! ```

use std::fmt;

use super::{CastleSide, Coordinate, PieceKind};

/// Everything needed to write one move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveNotation {
    pub kind: PieceKind,
    pub from: Coordinate,
    pub to: Coordinate,
    pub capture: bool,
    /// Another piece of the same kind could also reach `to`.
    pub ambiguous: bool,
    pub en_passant: bool,
    pub castle: Option<CastleSide>,
    pub promotion: Option<PieceKind>,
    pub check: bool,
    pub checkmate: bool,
}

impl MoveNotation {
    #[must_use]
    pub fn new(kind: PieceKind, from: Coordinate, to: Coordinate) -> Self {
        MoveNotation {
            kind,
            from,
            to,
            capture: false,
            ambiguous: false,
            en_passant: false,
            castle: None,
            promotion: None,
            check: false,
            checkmate: false,
        }
    }

    #[must_use]
    pub fn capture(mut self, capture: bool) -> Self {
        self.capture = capture;
        self
    }

    #[must_use]
    pub fn ambiguous(mut self, ambiguous: bool) -> Self {
        self.ambiguous = ambiguous;
        self
    }

    #[must_use]
    pub fn en_passant(mut self) -> Self {
        self.en_passant = true;
        self.capture = true;
        self
    }

    #[must_use]
    pub fn castle(mut self, side: CastleSide) -> Self {
        self.castle = Some(side);
        self
    }

    #[must_use]
    pub fn promotion(mut self, kind: Option<PieceKind>) -> Self {
        self.promotion = kind;
        self
    }

    #[must_use]
    pub fn check(mut self, check: bool, checkmate: bool) -> Self {
        self.check = check;
        self.checkmate = checkmate;
        self
    }
}

impl fmt::Display for MoveNotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(side) = self.castle {
            return f.write_str(side.notation());
        }

        if self.en_passant {
            return write!(f, "{}x{} e.p.", self.from.file(), self.to);
        }

        if let Some(letter) = self.kind.notation_letter() {
            write!(f, "{letter}")?;
        }

        let pawn_capture = self.kind == PieceKind::Pawn && self.capture;
        if pawn_capture || self.ambiguous {
            write!(f, "{}", self.from.file())?;
        }

        if self.capture {
            f.write_str("x")?;
        }

        write!(f, "{}", self.to)?;

        if let Some(letter) = self.promotion.and_then(PieceKind::notation_letter) {
            write!(f, "{letter}")?;
        }

        if self.check {
            f.write_str("+")?;
        }
        if self.checkmate {
            f.write_str("#")?;
        }

        Ok(())
    }
}

/// Format a move as notation text.
#[must_use]
pub fn format_move(notation: &MoveNotation) -> String {
    notation.to_string()
}
