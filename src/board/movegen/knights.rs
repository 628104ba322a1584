use super::super::{Board, Coordinate, MoveKind, Piece};

const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

impl Board {
    /// Knights jump: only the offset and the landing cell matter.
    pub(crate) fn knight_move_kind(&self, knight: &Piece, dest: Coordinate) -> Option<MoveKind> {
        let dr = (dest.row as isize - knight.position.row as isize).abs();
        let dc = (dest.column as isize - knight.position.column as isize).abs();
        if (dr, dc) != (2, 1) && (dr, dc) != (1, 2) {
            return None;
        }
        self.landing_kind(knight.team, dest)
    }

    pub(crate) fn knight_guide(&self, knight: &Piece) -> Vec<Coordinate> {
        KNIGHT_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| knight.position.offset(dr, dc))
            .filter(|&dest| self.landing_kind(knight.team, dest).is_some())
            .collect()
    }
}
