//! Per-piece legality and move guides.
//!
//! Each kind has its own rule in a sibling module; `is_valid_move` and
//! `move_guide` dispatch on `PieceKind` with a single `match`. None of these
//! look at whether the mover's king ends up attacked. The only such veto is
//! applied by the game engine, and only to king moves.

mod kings;
mod knights;
mod pawns;
mod sliders;

pub(crate) use kings::castle_path;
use sliders::SliderType;

use super::{Board, Coordinate, MoveKind, Piece, PieceId, PieceKind, Team};

impl Board {
    /// Empty lands quietly, an opposing piece is captured, a friendly one blocks.
    #[inline]
    pub(crate) fn landing_kind(&self, team: Team, dest: Coordinate) -> Option<MoveKind> {
        match self.piece_at(dest) {
            None => Some(MoveKind::Quiet),
            Some(occupant) if occupant.team != team => Some(MoveKind::Capture),
            Some(_) => None,
        }
    }
}

/// Piece-level legality of moving `piece` to `dest`.
///
/// `special` is the one-ply special-move memory; pawns use it for en passant.
/// Returns what kind of move it would be, or `None` if illegal.
#[must_use]
pub fn is_valid_move(
    board: &Board,
    piece: &Piece,
    dest: Coordinate,
    special: Option<PieceId>,
) -> Option<MoveKind> {
    match piece.kind {
        PieceKind::Pawn => board.pawn_move_kind(piece, dest, special),
        PieceKind::Knight => board.knight_move_kind(piece, dest),
        PieceKind::King => board.king_move_kind(piece, dest),
        kind => {
            let slider = SliderType::of(kind)?;
            board.slider_move_kind(piece, slider, dest)
        }
    }
}

/// Every destination `piece` passes its own legality check for.
#[must_use]
pub fn move_guide(board: &Board, piece: &Piece, special: Option<PieceId>) -> Vec<Coordinate> {
    match piece.kind {
        PieceKind::Pawn => board.pawn_guide(piece, special),
        PieceKind::Knight => board.knight_guide(piece),
        PieceKind::King => board.king_guide(piece),
        kind => SliderType::of(kind)
            .map(|slider| board.slider_guide(piece, slider))
            .unwrap_or_default(),
    }
}

/// Whether `piece` threatens `dest` for attacked-square purposes.
///
/// Same as `is_valid_move` except kings count only their one-square rule.
pub(crate) fn threatens(
    board: &Board,
    piece: &Piece,
    dest: Coordinate,
    special: Option<PieceId>,
) -> bool {
    match piece.kind {
        PieceKind::King => board.king_step_kind(piece, dest).is_some(),
        _ => is_valid_move(board, piece, dest, special).is_some(),
    }
}
