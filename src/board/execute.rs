//! Committing a move.
//!
//! Order matters here: the special-move branch runs first (it can abort a
//! castle), ambiguity and notation are computed against the board before the
//! mover leaves its square, and the special-move memory is settled last.

use crate::logging::{board_debug, board_warn};

use super::error::MoveError;
use super::movegen::is_valid_move;
use super::san::MoveNotation;
use super::{Coordinate, Game, MoveKind, MoveRecord, Piece, PieceKind};

impl Game {
    /// Move the selected piece to `dest`.
    ///
    /// On success the board, capture lists, move log and turn are updated and
    /// the selection is cleared. On failure nothing on the board changes and
    /// the selection is kept; a castle through an attacked square also clears
    /// the special-move memory.
    pub fn try_move(&mut self, dest: Coordinate) -> Result<MoveRecord, MoveError> {
        let piece = self
            .selected_piece()
            .cloned()
            .ok_or(MoveError::NoSelection)?;
        let from = piece.position;

        let Some(kind) = self.is_move_allowed(&piece, dest) else {
            board_debug!("rejected {} from {from} to {dest}", piece.name());
            return Err(MoveError::IllegalDestination { from, to: dest });
        };

        let previous_special = self.special_move;

        let captured = match kind {
            MoveKind::EnPassant => self.board.remove(Coordinate::new(from.row, dest.column)),
            MoveKind::Castle(side) => {
                if let Some(square) = self.attacked_castle_square(&piece, side) {
                    self.special_move = None;
                    board_warn!("{} cannot castle: {square} is attacked", piece.team);
                    return Err(MoveError::CastlingPathAttacked { square });
                }
                let corner = Coordinate::new(from.row, side.rook_column());
                if let Some(rook) = self.board.id_at(corner) {
                    self.board
                        .relocate(rook, Coordinate::new(from.row, side.rook_target_column()));
                    if let Some(rook) = self.board.get_mut(rook) {
                        rook.has_moved = true;
                    }
                }
                None
            }
            _ => self.board.id_at(dest),
        };

        let ambiguous = self.is_ambiguous(&piece, dest);

        if let Some(taken) = captured.and_then(|id| self.board.get(id)) {
            let team = taken.team.index();
            let id = taken.id;
            self.active[team].retain(|&other| other != id);
            self.captured[team].push(id);
        }

        let mut notation = MoveNotation::new(piece.kind, from, dest)
            .capture(kind.is_capture())
            .ambiguous(ambiguous)
            .check(false, false);
        match kind {
            MoveKind::EnPassant => notation = notation.en_passant(),
            MoveKind::Castle(side) => notation = notation.castle(side),
            _ => {}
        }
        let notation = notation.to_string();
        self.move_log.push(notation.clone());

        self.board.relocate(piece.id, dest);
        if matches!(piece.kind, PieceKind::King | PieceKind::Rook) {
            if let Some(moved) = self.board.get_mut(piece.id) {
                moved.has_moved = true;
            }
        }

        self.deselect();
        self.turn = self.turn.opponent();

        if kind.is_special() {
            self.special_move = Some(piece.id);
        } else if previous_special.is_some() {
            self.special_move = None;
        }

        board_debug!("{} played {notation}", piece.team);

        Ok(MoveRecord {
            piece: piece.id,
            from,
            to: dest,
            kind,
            captured,
            notation,
        })
    }

    /// Boolean form of `try_move`: true iff the move was committed.
    pub fn move_piece(&mut self, dest: Coordinate) -> bool {
        self.try_move(dest).is_ok()
    }

    /// Another piece of the same kind and team could also reach `dest`.
    fn is_ambiguous(&self, mover: &Piece, dest: Coordinate) -> bool {
        if matches!(mover.kind, PieceKind::Pawn | PieceKind::King) {
            return false;
        }
        self.active_pieces(mover.team)
            .filter(|other| other.id != mover.id && other.kind == mover.kind)
            .any(|other| is_valid_move(&self.board, other, dest, self.special_move).is_some())
    }

    /// Select the piece on `from` and move it to `to` in one step.
    pub fn play(&mut self, from: Coordinate, to: Coordinate) -> Result<MoveRecord, MoveError> {
        if !self.select(from) {
            return Err(MoveError::NoSelection);
        }
        self.try_move(to)
    }

    /// The piece a committed move took, if any.
    #[must_use]
    pub fn captured_piece(&self, record: &MoveRecord) -> Option<&Piece> {
        record.captured.and_then(|id| self.board.get(id))
    }
}
