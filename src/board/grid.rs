//! The 8×8 grid and its piece arena.
//!
//! Cells hold `PieceId`s into the arena rather than pieces. Captured pieces
//! stay in the arena so the id of every piece ever placed stays valid for the
//! whole game.

use super::{Coordinate, Piece, PieceId, PieceKind, Team};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<PieceId>; 8]; 8],
    arena: Vec<Piece>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard starting position: Black on rows 0-1, White on rows 6-7.
    ///
    /// Pieces are created Black first, back rank a to h then pawns, so the
    /// arena order is stable between games.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for team in [Team::Black, Team::White] {
            let back = team.back_row();
            for (column, &kind) in PieceKind::BACK_RANK.iter().enumerate() {
                board.place(kind, team, Coordinate::new(back, column));
            }
            let home = team.pawn_home_row();
            for column in 0..8 {
                board.place(PieceKind::Pawn, team, Coordinate::new(home, column));
            }
        }
        board
    }

    /// A board with no pieces.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
            arena: Vec::with_capacity(32),
        }
    }

    /// Create a piece at `at`. An existing occupant is removed from the grid.
    pub(crate) fn place(&mut self, kind: PieceKind, team: Team, at: Coordinate) -> PieceId {
        let id = PieceId(self.arena.len());
        self.arena.push(Piece::new(id, kind, team, at));
        self.cells[at.row][at.column] = Some(id);
        id
    }

    /// Id of the piece on `at`, if any.
    #[inline]
    #[must_use]
    pub fn id_at(&self, at: Coordinate) -> Option<PieceId> {
        self.cells[at.row][at.column]
    }

    /// The piece on `at`, if any.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, at: Coordinate) -> Option<&Piece> {
        self.id_at(at).map(|id| &self.arena[id.0])
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, at: Coordinate) -> bool {
        self.id_at(at).is_none()
    }

    /// Look up a piece record by id. Captured pieces are still returned.
    #[must_use]
    pub fn get(&self, id: PieceId) -> Option<&Piece> {
        self.arena.get(id.0)
    }

    pub(crate) fn get_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.arena.get_mut(id.0)
    }

    /// Returns true if the piece is on the grid, at the cell its record names.
    #[must_use]
    pub fn is_on_board(&self, id: PieceId) -> bool {
        self.get(id)
            .is_some_and(|p| self.id_at(p.position) == Some(id))
    }

    /// Every piece record ever placed, captured ones included.
    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        &self.arena
    }

    /// Clear a cell and return what was on it.
    pub(crate) fn remove(&mut self, at: Coordinate) -> Option<PieceId> {
        self.cells[at.row][at.column].take()
    }

    /// Move a piece from its cell to `to`, updating grid and record together.
    ///
    /// Whatever occupied `to` is dropped from the grid; capture bookkeeping is
    /// the caller's job.
    pub(crate) fn relocate(&mut self, id: PieceId, to: Coordinate) {
        let Some(from) = self.get(id).map(|p| p.position) else {
            return;
        };
        if self.id_at(from) == Some(id) {
            self.cells[from.row][from.column] = None;
        }
        self.cells[to.row][to.column] = Some(id);
        if let Some(piece) = self.get_mut(id) {
            piece.position = to;
        }
    }

    /// Rows of symbols, `None` for empty cells, row 0 first.
    #[must_use]
    pub fn symbols(&self) -> [[Option<char>; 8]; 8] {
        let mut out = [[None; 8]; 8];
        for at in Coordinate::all() {
            out[at.row][at.column] = self.piece_at(at).map(Piece::symbol);
        }
        out
    }
}
