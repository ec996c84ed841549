//! Ranked per-cell search results.

use crate::candidate::cell::{best_per_cell, GridCell};
use crate::candidate::rank::sort_results_desc;
use crate::search::{Comparison, ComparisonResult};

/// Why a result set holds what it holds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchStatus {
    /// At least one cell produced a result.
    Found,
    /// There were no window positions to evaluate.
    #[default]
    NoCandidates,
    /// Positions were evaluated but none fit all three images.
    NoValidComparisons,
}

/// Counters collected while building a result set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Window positions evaluated.
    pub candidates: usize,
    /// Positions that produced a valid comparison.
    pub valid: usize,
    /// Non-empty grid cells, equal to the number of results.
    pub cells: usize,
    /// Whether the worker pool evaluated the positions.
    pub parallel: bool,
}

/// Results sorted by descending score, one per non-empty grid cell.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultSet {
    results: Vec<ComparisonResult>,
    grid_size: usize,
    status: SearchStatus,
    stats: SearchStats,
}

impl ResultSet {
    /// Reduces comparisons given in enumeration order (y, then x).
    pub(crate) fn from_comparisons(
        comparisons: Vec<Comparison>,
        grid_size: usize,
        parallel: bool,
    ) -> Self {
        let candidates = comparisons.len();
        let valid: Vec<ComparisonResult> = comparisons
            .into_iter()
            .filter_map(Comparison::valid)
            .collect();
        let valid_count = valid.len();

        let mut results = best_per_cell(valid, grid_size);
        sort_results_desc(&mut results);

        let status = if candidates == 0 {
            SearchStatus::NoCandidates
        } else if results.is_empty() {
            SearchStatus::NoValidComparisons
        } else {
            SearchStatus::Found
        };
        let stats = SearchStats {
            candidates,
            valid: valid_count,
            cells: results.len(),
            parallel,
        };
        Self {
            results,
            grid_size,
            status,
            stats,
        }
    }

    /// Builds a set from already reduced results, sorting them by score.
    ///
    /// An empty input yields [`SearchStatus::NoValidComparisons`].
    pub fn from_ranked(mut results: Vec<ComparisonResult>, grid_size: usize) -> Self {
        sort_results_desc(&mut results);
        let status = if results.is_empty() {
            SearchStatus::NoValidComparisons
        } else {
            SearchStatus::Found
        };
        let stats = SearchStats {
            candidates: results.len(),
            valid: results.len(),
            cells: results.len(),
            parallel: false,
        };
        Self {
            results,
            grid_size,
            status,
            stats,
        }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Returns the result at `index` in score order.
    pub fn get(&self, index: usize) -> Option<&ComparisonResult> {
        self.results.get(index)
    }

    /// Returns the highest-scoring result.
    pub fn best(&self) -> Option<&ComparisonResult> {
        self.results.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ComparisonResult> {
        self.results.iter()
    }

    pub fn as_slice(&self) -> &[ComparisonResult] {
        &self.results
    }

    pub fn into_vec(self) -> Vec<ComparisonResult> {
        self.results
    }

    /// Grid size the results were reduced with.
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Grid cell of a result in this set.
    pub fn cell_of(&self, result: &ComparisonResult) -> GridCell {
        GridCell::of_result(result, self.grid_size.max(1))
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a ComparisonResult;
    type IntoIter = std::slice::Iter<'a, ComparisonResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}
