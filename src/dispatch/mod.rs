//! Dispatch strategies for window evaluation.
//!
//! Every window comparison is a pure function of the shared read-only
//! buffers, so a strategy only decides where the work runs. All strategies
//! return comparisons in enumeration order (ascending y, then ascending x),
//! which keeps the downstream reduction independent of scheduling.

use crate::metric::Metric;
use crate::search::cancel::CancelToken;
use crate::search::compare::{compare_at, Comparison};
use crate::search::plan::SearchPlan;
use crate::search::Mode;
use crate::util::PatchCmpResult;
use crate::ImageView;

mod sequential;

#[cfg(feature = "rayon")]
mod rayon;

pub use sequential::SequentialDispatch;

#[cfg(feature = "rayon")]
pub use self::rayon::RayonDispatch;

/// How window evaluations are scheduled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DispatchPolicy {
    /// Use the worker pool when the candidate count exceeds the threshold.
    #[default]
    Auto,
    /// Always evaluate on the calling thread.
    Sequential,
    /// Always use the worker pool; falls back to sequential without `rayon`.
    Parallel,
}

impl DispatchPolicy {
    /// Decides whether `candidates` positions go to the worker pool.
    pub fn use_parallel(self, candidates: usize, threshold: usize) -> bool {
        if !cfg!(feature = "rayon") {
            return false;
        }
        match self {
            DispatchPolicy::Auto => candidates > threshold,
            DispatchPolicy::Sequential => false,
            DispatchPolicy::Parallel => true,
        }
    }
}

/// Read-only inputs shared by every window evaluation of one search.
#[derive(Clone, Copy, Debug)]
pub struct WindowJob<'a> {
    pub a: ImageView<'a, u8>,
    pub b: ImageView<'a, u8>,
    pub gt: ImageView<'a, u8>,
    pub window_size: usize,
    pub mode: Mode,
    pub metric: Metric,
}

impl WindowJob<'_> {
    /// Compares the window at `(x, y)`.
    #[inline]
    pub fn evaluate(&self, x: usize, y: usize) -> PatchCmpResult<Comparison> {
        compare_at(
            self.a,
            self.b,
            self.gt,
            x,
            y,
            self.window_size,
            self.mode,
            self.metric,
        )
    }

}

/// Strategy interface for evaluating all placements of a plan.
pub trait Dispatch: Sync {
    /// Evaluates every placement in `plan` and returns the comparisons in
    /// enumeration order.
    ///
    /// The token is checked between rows; a cancelled run returns
    /// [`PatchCmpError::Cancelled`](crate::PatchCmpError::Cancelled).
    fn evaluate_all(
        &self,
        job: &WindowJob<'_>,
        plan: &SearchPlan,
        cancel: &CancelToken,
    ) -> PatchCmpResult<Vec<Comparison>>;
}

/// Picks the strategy for a search.
#[cfg(feature = "rayon")]
pub(crate) fn select(parallel: bool) -> &'static dyn Dispatch {
    if parallel {
        &RayonDispatch
    } else {
        &SequentialDispatch
    }
}

/// Picks the strategy for a search; only sequential dispatch is compiled in.
#[cfg(not(feature = "rayon"))]
pub(crate) fn select(_parallel: bool) -> &'static dyn Dispatch {
    &SequentialDispatch
}

#[cfg(test)]
mod tests {
    use super::{select, DispatchPolicy, WindowJob};
    use crate::metric::Metric;
    use crate::search::cancel::CancelToken;
    use crate::search::plan::SearchPlan;
    use crate::search::Mode;
    use crate::ImageView;

    #[test]
    fn auto_switches_above_threshold() {
        let expect_parallel = cfg!(feature = "rayon");
        assert!(!DispatchPolicy::Auto.use_parallel(1000, 1000));
        assert_eq!(DispatchPolicy::Auto.use_parallel(1001, 1000), expect_parallel);
        assert!(!DispatchPolicy::Sequential.use_parallel(1_000_000, 1000));
        assert_eq!(DispatchPolicy::Parallel.use_parallel(1, 1000), expect_parallel);
    }

    #[test]
    fn selected_strategies_agree() {
        let data: Vec<u8> = (0..12 * 9).map(|i| (i * 31 % 256) as u8).collect();
        let gt = vec![128u8; 12 * 9];
        let a = ImageView::from_slice(&data, 12, 9).unwrap();
        let g = ImageView::from_slice(&gt, 12, 9).unwrap();
        let job = WindowJob {
            a,
            b: g,
            gt: g,
            window_size: 4,
            mode: Mode::PreferB,
            metric: Metric::Mse,
        };
        let plan = SearchPlan::for_views(a, g, g, 4, 3).unwrap();
        let cancel = CancelToken::new();

        let seq = select(false).evaluate_all(&job, &plan, &cancel).unwrap();
        let par = select(true).evaluate_all(&job, &plan, &cancel).unwrap();
        assert_eq!(seq.len(), plan.candidates());
        assert_eq!(seq, par);
    }
}
