//! Sequential navigation over a ranked result set.

use crate::candidate::cell::GridCell;
use crate::search::{ComparisonResult, ResultSet};

/// Cursor over a [`ResultSet`].
///
/// The cursor never wraps; moving past either end is a no-op reported by the
/// boolean return value.
#[derive(Clone, Debug, Default)]
pub struct ResultNavigator {
    results: ResultSet,
    cursor: usize,
}

impl ResultNavigator {
    /// Wraps a result set with the cursor on the best result.
    pub fn new(results: ResultSet) -> Self {
        Self { results, cursor: 0 }
    }

    /// Returns the selected result, or `None` for an empty set.
    pub fn current(&self) -> Option<&ComparisonResult> {
        self.results.get(self.cursor)
    }

    /// Moves to the next result. Returns whether the cursor moved.
    pub fn advance(&mut self) -> bool {
        if self.has_next() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Moves to the previous result. Returns whether the cursor moved.
    pub fn retreat(&mut self) -> bool {
        if self.has_prev() {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Replaces the result set and moves the cursor back to the start.
    pub fn reset(&mut self, results: ResultSet) {
        self.results = results;
        self.cursor = 0;
    }

    /// Drops all results, e.g. after the window size, grid size or an image
    /// changed.
    pub fn clear(&mut self) {
        self.reset(ResultSet::default());
    }

    /// Returns the cursor position.
    pub fn index(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn has_next(&self) -> bool {
        self.cursor + 1 < self.results.len()
    }

    pub fn has_prev(&self) -> bool {
        self.cursor > 0 && !self.results.is_empty()
    }

    /// Grid cell of the selected result.
    pub fn current_cell(&self) -> Option<GridCell> {
        self.current().map(|result| self.results.cell_of(result))
    }

    /// Returns the wrapped result set.
    pub fn result_set(&self) -> &ResultSet {
        &self.results
    }
}
