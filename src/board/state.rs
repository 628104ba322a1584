//! The game engine: turns, selection and move guides.
//!
//! `Game` owns the board and every piece in it. Presentation code reads the
//! observables and drives the engine through `new_game`, `select_piece` /
//! `select` and `try_move` / `move_piece`. A `clone()` is a fully independent
//! copy (pieces are addressed by id, never shared).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::logging::board_debug;

use super::movegen::{castle_path, is_valid_move, move_guide, threatens};
use super::{Board, CastleSide, Coordinate, MoveKind, MoveLog, Piece, PieceId, PieceKind, Team};

#[derive(Clone, Debug)]
pub struct Game {
    pub(crate) board: Board,
    /// Pieces still on the board, per team.
    pub(crate) active: [Vec<PieceId>; 2],
    /// Pieces taken off the board, per team, in capture order.
    pub(crate) captured: [Vec<PieceId>; 2],
    pub(crate) turn: Team,
    pub(crate) selected: Option<PieceId>,
    pub(crate) move_guide: Vec<Coordinate>,
    /// Piece that just double-stepped or castled. Lives for one opposing move.
    pub(crate) special_move: Option<PieceId>,
    pub(crate) move_log: MoveLog,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A game at the standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        Game::from_board(Board::new(), Team::White)
    }

    pub(crate) fn from_board(board: Board, turn: Team) -> Self {
        let mut active: [Vec<PieceId>; 2] = [Vec::with_capacity(16), Vec::with_capacity(16)];
        for piece in board.pieces() {
            if board.is_on_board(piece.id) {
                active[piece.team.index()].push(piece.id);
            }
        }
        Game {
            board,
            active,
            captured: [Vec::new(), Vec::new()],
            turn,
            selected: None,
            move_guide: Vec::new(),
            special_move: None,
            move_log: MoveLog::new(),
        }
    }

    /// Reset to the standard starting position with fresh pieces, White to move.
    pub fn new_game(&mut self) {
        *self = Game::new();
        board_debug!("new game");
    }

    // --- observables ---

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    #[inline]
    #[must_use]
    pub fn turn(&self) -> Team {
        self.turn
    }

    #[must_use]
    pub fn selected_piece(&self) -> Option<&Piece> {
        self.selected.and_then(|id| self.board.get(id))
    }

    /// Legal destinations for the selected piece; empty without a selection.
    #[inline]
    #[must_use]
    pub fn move_guide(&self) -> &[Coordinate] {
        &self.move_guide
    }

    #[inline]
    #[must_use]
    pub fn move_log(&self) -> &MoveLog {
        &self.move_log
    }

    /// The piece held in the one-ply special-move memory.
    #[must_use]
    pub fn special_move(&self) -> Option<&Piece> {
        self.special_move.and_then(|id| self.board.get(id))
    }

    /// Pieces of `team` still on the board.
    pub fn active_pieces(&self, team: Team) -> impl Iterator<Item = &Piece> + '_ {
        self.active[team.index()]
            .iter()
            .filter_map(move |&id| self.board.get(id))
    }

    /// Pieces of `team` that have been captured, oldest first.
    pub fn captured(&self, team: Team) -> impl Iterator<Item = &Piece> + '_ {
        self.captured[team.index()]
            .iter()
            .filter_map(move |&id| self.board.get(id))
    }

    /// The piece on `at`, if any.
    #[must_use]
    pub fn piece_at(&self, at: Coordinate) -> Option<&Piece> {
        self.board.piece_at(at)
    }

    // --- selection ---

    /// Select a piece by id. Only a piece on the board belonging to the side
    /// to move can be selected; otherwise returns false and keeps any
    /// previous selection.
    pub fn select_piece(&mut self, id: PieceId) -> bool {
        let Some(piece) = self.board.get(id) else {
            return false;
        };
        if piece.team != self.turn || !self.board.is_on_board(id) {
            return false;
        }
        self.move_guide = self.guide_for(piece);
        self.selected = Some(id);
        board_debug!(
            "selected {} on {} ({} destinations)",
            piece.name(),
            piece.position,
            self.move_guide.len()
        );
        true
    }

    /// Select whatever stands on `at`.
    pub fn select(&mut self, at: Coordinate) -> bool {
        match self.board.id_at(at) {
            Some(id) => self.select_piece(id),
            None => false,
        }
    }

    pub fn deselect(&mut self) {
        self.selected = None;
        self.move_guide.clear();
    }

    /// Destinations `piece` could be moved to right now.
    ///
    /// The piece's own guide, with king destinations the opponent attacks
    /// removed. Other pieces are not filtered for exposing their king.
    #[must_use]
    pub fn guide_for(&self, piece: &Piece) -> Vec<Coordinate> {
        let mut guide = move_guide(&self.board, piece, self.special_move);
        if piece.kind == PieceKind::King {
            guide.retain(|&dest| !self.is_position_checked(dest, piece.team));
        }
        guide
    }

    // --- legality ---

    /// Engine-level legality: the piece's own rule, plus for kings the veto on
    /// destinations attacked by the opponent.
    #[must_use]
    pub fn is_move_allowed(&self, piece: &Piece, dest: Coordinate) -> Option<MoveKind> {
        let kind = is_valid_move(&self.board, piece, dest, self.special_move)?;
        if piece.kind == PieceKind::King && self.is_position_checked(dest, piece.team) {
            return None;
        }
        Some(kind)
    }

    /// Returns true if any piece opposing `team` could move to `at`.
    ///
    /// Reuses each attacker's movement rule as is, so a pawn "attacks" the
    /// empty cell in front of it but not an empty diagonal, and a cell held by
    /// the attacker's own side is never attacked.
    #[must_use]
    pub fn is_position_checked(&self, at: Coordinate, team: Team) -> bool {
        self.active_pieces(team.opponent())
            .any(|attacker| threatens(&self.board, attacker, at, self.special_move))
    }

    /// First cell on the king's castling path that the opponent attacks.
    #[must_use]
    pub(crate) fn attacked_castle_square(
        &self,
        king: &Piece,
        side: CastleSide,
    ) -> Option<Coordinate> {
        castle_path(king.position, side)
            .into_iter()
            .find(|&cell| self.is_position_checked(cell, king.team))
    }

    /// Every (piece, destination) pair the side to move can play with
    /// `try_move` succeeding.
    ///
    /// The selection guides, minus castles whose path is attacked (those stay
    /// in the king's guide but are refused when tried).
    #[must_use]
    pub fn legal_moves(&self) -> Vec<(PieceId, Coordinate)> {
        let mut moves = Vec::new();
        for piece in self.active_pieces(self.turn) {
            for dest in self.guide_for(piece) {
                if let Some(MoveKind::Castle(side)) = self.is_move_allowed(piece, dest) {
                    if self.attacked_castle_square(piece, side).is_some() {
                        continue;
                    }
                }
                moves.push((piece.id, dest));
            }
        }
        moves
    }

    /// A plain-data view of the game for renderers.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        let symbols = |team: Team| self.captured(team).map(Piece::symbol).collect();
        GameSnapshot {
            cells: self.board.symbols(),
            turn: self.turn,
            selected: self.selected_piece().map(|p| p.position),
            move_guide: self.move_guide.clone(),
            move_log: self.move_log.entries().to_vec(),
            captured_white: symbols(Team::White),
            captured_black: symbols(Team::Black),
        }
    }
}

/// Everything a renderer needs, detached from the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameSnapshot {
    /// Piece symbols by row then column, row 0 first.
    pub cells: [[Option<char>; 8]; 8],
    pub turn: Team,
    pub selected: Option<Coordinate>,
    pub move_guide: Vec<Coordinate>,
    pub move_log: Vec<String>,
    pub captured_white: Vec<char>,
    pub captured_black: Vec<char>,
}
