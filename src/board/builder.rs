//! Fluent builder for constructing game positions.
//!
//! Allows creating positions piece by piece instead of playing moves to reach
//! them.
//!
//! # Example
//! ```
//! use chess_match::board::{Coordinate, GameBuilder, PieceKind, Team};
//!
//! let game = GameBuilder::new()
//!     .piece(Coordinate::new(7, 4), Team::White, PieceKind::King)
//!     .piece(Coordinate::new(0, 4), Team::Black, PieceKind::King)
//!     .piece(Coordinate::new(6, 0), Team::White, PieceKind::Pawn)
//!     .turn(Team::White)
//!     .build();
//! assert_eq!(game.active_pieces(Team::White).count(), 2);
//! ```

use super::error::SetupError;
use super::{Board, Coordinate, Game, PieceKind, Team};

#[derive(Clone, Debug)]
struct Placement {
    at: Coordinate,
    team: Team,
    kind: PieceKind,
    has_moved: bool,
}

/// A fluent builder for constructing `Game` positions.
#[derive(Clone, Debug)]
pub struct GameBuilder {
    pieces: Vec<Placement>,
    turn: Team,
    special_move: Option<Coordinate>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBuilder {
    /// Create a new empty builder, White to move.
    #[must_use]
    pub fn new() -> Self {
        GameBuilder {
            pieces: Vec::new(),
            turn: Team::White,
            special_move: None,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        for team in [Team::Black, Team::White] {
            for (column, &kind) in PieceKind::BACK_RANK.iter().enumerate() {
                builder = builder.piece(Coordinate::new(team.back_row(), column), team, kind);
            }
            for column in 0..8 {
                builder = builder.piece(
                    Coordinate::new(team.pawn_home_row(), column),
                    team,
                    PieceKind::Pawn,
                );
            }
        }
        builder
    }

    /// Place a piece, replacing anything already on `at`.
    #[must_use]
    pub fn piece(mut self, at: Coordinate, team: Team, kind: PieceKind) -> Self {
        self.pieces.retain(|p| p.at != at);
        self.pieces.push(Placement {
            at,
            team,
            kind,
            has_moved: false,
        });
        self
    }

    /// Remove a piece from a cell.
    #[must_use]
    pub fn clear(mut self, at: Coordinate) -> Self {
        self.pieces.retain(|p| p.at != at);
        self
    }

    /// Mark the piece on `at` as having moved (kings and rooks lose castling).
    #[must_use]
    pub fn moved(mut self, at: Coordinate) -> Self {
        if let Some(p) = self.pieces.iter_mut().find(|p| p.at == at) {
            p.has_moved = true;
        }
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn turn(mut self, team: Team) -> Self {
        self.turn = team;
        self
    }

    /// Put the piece on `at` into the special-move memory, as if it had just
    /// double-stepped.
    #[must_use]
    pub const fn special_move(mut self, at: Coordinate) -> Self {
        self.special_move = Some(at);
        self
    }

    /// Build the game without validation.
    #[must_use]
    pub fn build(self) -> Game {
        let mut board = Board::empty();
        for placement in &self.pieces {
            let id = board.place(placement.kind, placement.team, placement.at);
            if let Some(piece) = board.get_mut(id) {
                piece.has_moved = placement.has_moved;
            }
        }
        let special = self.special_move.and_then(|at| board.id_at(at));
        let mut game = Game::from_board(board, self.turn);
        game.special_move = special;
        game
    }

    /// Build the game, requiring one king per team and at most 16 pieces each.
    pub fn try_build(self) -> Result<Game, SetupError> {
        for team in Team::BOTH {
            let count = self.pieces.iter().filter(|p| p.team == team).count();
            if count > 16 {
                return Err(SetupError::TooManyPieces { team, count });
            }
            let has_king = self
                .pieces
                .iter()
                .any(|p| p.team == team && p.kind == PieceKind::King);
            if !has_king {
                return Err(SetupError::MissingKing { team });
            }
        }
        Ok(self.build())
    }
}
