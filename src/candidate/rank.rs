//! Score ordering for reduced results.

use crate::search::ComparisonResult;

/// Sorts results by descending score.
///
/// The sort is stable: equal scores keep their input order.
pub fn sort_results_desc(results: &mut [ComparisonResult]) {
    results.sort_by(|a, b| b.score.total_cmp(&a.score));
}
