use std::ops::Range;

use thiserror::Error;

use crate::model::KanjiEntry;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DatasetError {
    #[error("kanji dataset cannot be empty")]
    Empty,
}

/// The ordered, read-only kanji list shared by browsing and practice.
///
/// Index positions are stable for the lifetime of the value; navigation wraps around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KanjiDataset {
    entries: Vec<KanjiEntry>,
}

impl KanjiDataset {
    /// Wrap a list of entries.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::Empty` if `entries` is empty.
    pub fn new(entries: Vec<KanjiEntry>) -> Result<Self, DatasetError> {
        if entries.is_empty() {
            return Err(DatasetError::Empty);
        }
        Ok(Self { entries })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with slices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[KanjiEntry] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&KanjiEntry> {
        self.entries.get(index)
    }

    /// Entries in `range`, or `None` if the range is out of bounds.
    #[must_use]
    pub fn slice(&self, range: Range<usize>) -> Option<&[KanjiEntry]> {
        self.entries.get(range)
    }

    /// Index after `index`, wrapping to the start.
    #[must_use]
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.entries.len()
    }

    /// Index before `index`, wrapping to the end.
    #[must_use]
    pub fn prev_index(&self, index: usize) -> usize {
        let len = self.entries.len();
        (index % len + len - 1) % len
    }
}
