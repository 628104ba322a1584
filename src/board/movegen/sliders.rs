use super::super::sight::{has_line_of_sight, ray_walk, DIAGONAL_DIRECTIONS, STRAIGHT_DIRECTIONS};
use super::super::{Board, Coordinate, MoveKind, Piece, PieceKind};

/// Type of sliding piece for move generation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    pub(crate) fn of(kind: PieceKind) -> Option<SliderType> {
        match kind {
            PieceKind::Bishop => Some(SliderType::Bishop),
            PieceKind::Rook => Some(SliderType::Rook),
            PieceKind::Queen => Some(SliderType::Queen),
            _ => None,
        }
    }

    fn allows(self, dr: isize, dc: isize) -> bool {
        let diagonal = dr.abs() == dc.abs();
        let straight = (dr == 0) != (dc == 0);
        match self {
            SliderType::Bishop => diagonal,
            SliderType::Rook => straight,
            SliderType::Queen => diagonal || straight,
        }
    }
}

impl Board {
    /// Bishop, rook and queen legality: line of sight plus the right geometry.
    pub(crate) fn slider_move_kind(
        &self,
        piece: &Piece,
        slider: SliderType,
        dest: Coordinate,
    ) -> Option<MoveKind> {
        if !has_line_of_sight(self, piece.team, piece.position, dest) {
            return None;
        }
        let dr = dest.row as isize - piece.position.row as isize;
        let dc = dest.column as isize - piece.position.column as isize;
        if !slider.allows(dr, dc) {
            return None;
        }
        self.landing_kind(piece.team, dest)
    }

    pub(crate) fn slider_guide(&self, piece: &Piece, slider: SliderType) -> Vec<Coordinate> {
        match slider {
            SliderType::Bishop => ray_walk(self, piece.team, piece.position, &DIAGONAL_DIRECTIONS),
            SliderType::Rook => ray_walk(self, piece.team, piece.position, &STRAIGHT_DIRECTIONS),
            SliderType::Queen => {
                let mut cells = ray_walk(self, piece.team, piece.position, &STRAIGHT_DIRECTIONS);
                cells.extend(ray_walk(self, piece.team, piece.position, &DIAGONAL_DIRECTIONS));
                cells
            }
        }
    }
}
