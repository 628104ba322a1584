use super::super::sight::{has_line_of_sight, ALL_DIRECTIONS};
use super::super::{Board, CastleSide, Coordinate, MoveKind, Piece, PieceKind};

impl Board {
    /// One square in any direction onto an empty or opposing cell.
    pub(crate) fn king_step_kind(&self, king: &Piece, dest: Coordinate) -> Option<MoveKind> {
        let dr = (dest.row as isize - king.position.row as isize).abs();
        let dc = (dest.column as isize - king.position.column as isize).abs();
        if dr.max(dc) != 1 || !has_line_of_sight(self, king.team, king.position, dest) {
            return None;
        }
        self.landing_kind(king.team, dest)
    }

    /// King legality without the attacked-square veto, which needs the
    /// opponent's pieces and lives in the game engine.
    pub(crate) fn king_move_kind(&self, king: &Piece, dest: Coordinate) -> Option<MoveKind> {
        self.king_step_kind(king, dest)
            .or_else(|| self.castle_side(king, dest).map(MoveKind::Castle))
    }

    /// The castling side if `dest` is a legal castling target for `king`.
    ///
    /// Neither the king nor the corner rook may have moved, every cell
    /// strictly between them is empty, and so is the king's destination.
    pub(crate) fn castle_side(&self, king: &Piece, dest: Coordinate) -> Option<CastleSide> {
        if king.has_moved || dest.row != king.position.row {
            return None;
        }
        let side = match dest.column as isize - king.position.column as isize {
            2 => CastleSide::King,
            -2 => CastleSide::Queen,
            _ => return None,
        };

        let corner = Coordinate::new(king.position.row, side.rook_column());
        let rook_ready = self.piece_at(corner).is_some_and(|rook| {
            rook.kind == PieceKind::Rook && rook.team == king.team && !rook.has_moved
        });
        if !rook_ready {
            return None;
        }

        let path_clear = castle_path(king.position, side)
            .into_iter()
            .all(|cell| self.is_empty(cell));
        (path_clear && self.is_empty(dest)).then_some(side)
    }

    pub(crate) fn king_guide(&self, king: &Piece) -> Vec<Coordinate> {
        let mut cells: Vec<Coordinate> = ALL_DIRECTIONS
            .iter()
            .filter_map(|&(dr, dc)| king.position.offset(dr, dc))
            .filter(|&dest| self.king_step_kind(king, dest).is_some())
            .collect();
        for side in [CastleSide::King, CastleSide::Queen] {
            if let Some(dest) = king.position.offset(0, 2 * side.direction()) {
                if self.castle_side(king, dest) == Some(side) {
                    cells.push(dest);
                }
            }
        }
        cells
    }
}

/// Cells strictly between a king on `from` and the corner rook on `side`,
/// walking outward from the king.
pub(crate) fn castle_path(from: Coordinate, side: CastleSide) -> Vec<Coordinate> {
    let mut cells = Vec::new();
    let mut cursor = from;
    while let Some(next) = cursor.offset(0, side.direction()) {
        if next.column == side.rook_column() {
            break;
        }
        cells.push(next);
        cursor = next;
    }
    cells
}
