//! The move log: one notation string per committed move.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Append-only list of notated moves, White's first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveLog {
    entries: Vec<String>,
}

/// One numbered round of the log: White's move and Black's reply, if made.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Round<'a> {
    pub number: usize,
    pub white: &'a str,
    pub black: Option<&'a str>,
}

impl MoveLog {
    #[must_use]
    pub fn new() -> Self {
        MoveLog {
            entries: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, notation: String) {
        self.entries.push(notation);
    }

    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.entries.iter()
    }

    /// Entries paired into numbered rounds, starting at 1.
    pub fn rounds(&self) -> impl Iterator<Item = Round<'_>> {
        self.entries.chunks(2).enumerate().map(|(i, pair)| Round {
            number: i + 1,
            white: pair[0].as_str(),
            black: pair.get(1).map(String::as_str),
        })
    }
}

impl<'a> IntoIterator for &'a MoveLog {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
