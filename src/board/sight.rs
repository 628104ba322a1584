//! Path obstruction checks shared by the line-moving pieces.

use super::{Board, Coordinate, Team};

pub(crate) const STRAIGHT_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const DIAGONAL_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const ALL_DIRECTIONS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

#[inline]
fn step_toward(from: usize, to: usize) -> usize {
    match from.cmp(&to) {
        std::cmp::Ordering::Less => from + 1,
        std::cmp::Ordering::Greater => from - 1,
        std::cmp::Ordering::Equal => from,
    }
}

/// Returns true if a piece of `team` standing on `from` can see `to`.
///
/// Walks one cell at a time, moving row and column independently toward the
/// target. Any occupied intermediate cell blocks. The final cell must be
/// empty or hold an opposing piece. `from == to` is never in sight.
///
/// Knights do not use this; they jump.
#[must_use]
pub fn has_line_of_sight(board: &Board, team: Team, from: Coordinate, to: Coordinate) -> bool {
    if from == to {
        return false;
    }

    let mut cursor = from;
    loop {
        cursor = Coordinate::new(
            step_toward(cursor.row, to.row),
            step_toward(cursor.column, to.column),
        );
        if cursor == to {
            break;
        }
        if !board.is_empty(cursor) {
            return false;
        }
    }

    match board.piece_at(to) {
        None => true,
        Some(occupant) => occupant.team != team,
    }
}

/// Cells reachable along each direction, stopping at the first occupied cell.
///
/// An opposing occupant is included (capture); a friendly one is not.
pub(crate) fn ray_walk(
    board: &Board,
    team: Team,
    from: Coordinate,
    directions: &[(isize, isize)],
) -> Vec<Coordinate> {
    let mut cells = Vec::new();
    for &(dr, dc) in directions {
        let mut cursor = from;
        while let Some(next) = cursor.offset(dr, dc) {
            match board.piece_at(next) {
                None => cells.push(next),
                Some(occupant) => {
                    if occupant.team != team {
                        cells.push(next);
                    }
                    break;
                }
            }
            cursor = next;
        }
    }
    cells
}
