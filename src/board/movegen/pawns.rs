use super::super::sight::has_line_of_sight;
use super::super::{Board, Coordinate, MoveKind, Piece, PieceId};

impl Board {
    /// Pawn legality.
    ///
    /// Forward one onto an empty cell; forward two from the home row with both
    /// cells empty; diagonal forward onto an opposing piece; diagonal forward
    /// onto an empty cell when the cell beside the pawn, in the destination's
    /// column, holds the `special` piece (en passant).
    pub(crate) fn pawn_move_kind(
        &self,
        pawn: &Piece,
        dest: Coordinate,
        special: Option<PieceId>,
    ) -> Option<MoveKind> {
        if !has_line_of_sight(self, pawn.team, pawn.position, dest) {
            return None;
        }

        let from = pawn.position;
        let dir = pawn.team.pawn_direction();
        let dr = dest.row as isize - from.row as isize;
        let dc = dest.column as isize - from.column as isize;

        if dr == dir && dc == 0 && self.is_empty(dest) {
            return Some(MoveKind::Quiet);
        }

        if from.row == pawn.team.pawn_home_row()
            && dr == 2 * dir
            && dc == 0
            && self.is_empty(dest)
        {
            return Some(MoveKind::DoubleStep);
        }

        if dr == dir && dc.abs() == 1 {
            match self.piece_at(dest) {
                Some(target) if target.team != pawn.team => return Some(MoveKind::Capture),
                Some(_) => return None,
                None => {
                    let behind = self.id_at(Coordinate::new(from.row, dest.column));
                    if behind.is_some() && behind == special {
                        return Some(MoveKind::EnPassant);
                    }
                }
            }
        }

        None
    }

    pub(crate) fn pawn_guide(&self, pawn: &Piece, special: Option<PieceId>) -> Vec<Coordinate> {
        let from = pawn.position;
        let dir = pawn.team.pawn_direction();
        [(dir, 0), (2 * dir, 0), (dir, -1), (dir, 1)]
            .into_iter()
            .filter_map(|(dr, dc)| from.offset(dr, dc))
            .filter(|&dest| self.pawn_move_kind(pawn, dest, special).is_some())
            .collect()
    }
}
