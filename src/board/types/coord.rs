//! Board coordinates.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::CoordinateError;

/// Rank digit for each row. Row 0 is Black's back rank.
const ROW_TO_RANK: [char; 8] = ['8', '7', '6', '5', '4', '3', '2', '1'];

/// File letter for each column.
const COLUMN_TO_FILE: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// A cell on the board, addressed as (row, column).
///
/// Row 0 is the back rank of Black; increasing rows move toward White's
/// back rank at row 7. Columns run from the a-file (0) to the h-file (7).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate {
    pub row: usize,
    pub column: usize,
}

impl Coordinate {
    /// Create a coordinate. Callers keep `row` and `column` within 0..8.
    #[inline]
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Coordinate { row, column }
    }

    /// Returns true if this coordinate is (`row`, `column`).
    #[inline]
    #[must_use]
    pub const fn equals(self, row: usize, column: usize) -> bool {
        self.row == row && self.column == column
    }

    /// File letter, `a` through `h`.
    #[inline]
    #[must_use]
    pub fn file(self) -> char {
        COLUMN_TO_FILE[self.column]
    }

    /// Rank digit, `8` for row 0 down to `1` for row 7.
    #[inline]
    #[must_use]
    pub fn rank(self) -> char {
        ROW_TO_RANK[self.row]
    }

    /// Two-character algebraic name, e.g. `"e4"`.
    #[must_use]
    pub fn to_notation(self) -> String {
        let mut s = String::with_capacity(2);
        s.push(self.file());
        s.push(self.rank());
        s
    }

    /// Returns true if `notation` names this cell.
    #[must_use]
    pub fn matches(self, notation: &str) -> bool {
        notation.parse::<Coordinate>() == Ok(self)
    }

    /// The cell `dr` rows and `dc` columns away, or `None` off the board.
    #[inline]
    #[must_use]
    pub fn offset(self, dr: isize, dc: isize) -> Option<Coordinate> {
        let row = self.row as isize + dr;
        let column = self.column as isize + dc;
        if (0..8).contains(&row) && (0..8).contains(&column) {
            Some(Coordinate::new(row as usize, column as usize))
        } else {
            None
        }
    }

    /// All 64 cells, row by row starting at a8.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..8).flat_map(|row| (0..8).map(move |column| Coordinate::new(row, column)))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl TryFrom<(usize, usize)> for Coordinate {
    type Error = CoordinateError;

    fn try_from((row, column): (usize, usize)) -> Result<Self, Self::Error> {
        if row >= 8 {
            return Err(CoordinateError::RowOutOfBounds { row });
        }
        if column >= 8 {
            return Err(CoordinateError::ColumnOutOfBounds { column });
        }
        Ok(Coordinate::new(row, column))
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoordinateError::InvalidNotation {
            notation: s.to_string(),
        };
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let column = COLUMN_TO_FILE
            .iter()
            .position(|&c| c == file.to_ascii_lowercase())
            .ok_or_else(invalid)?;
        let row = ROW_TO_RANK
            .iter()
            .position(|&c| c == rank)
            .ok_or_else(invalid)?;

        Ok(Coordinate::new(row, column))
    }
}
