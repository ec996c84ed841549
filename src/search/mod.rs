//! Grid search for windows where one candidate beats the other.
//!
//! `Searcher::search` enumerates every window position in the common overlap
//! of the three images, compares each window through the selected dispatch
//! strategy, keeps the best window per grid cell and ranks the survivors by
//! score. The reduction runs after all comparisons have been collected, so
//! the result does not depend on how the work was scheduled.

pub(crate) mod cancel;
pub(crate) mod compare;
pub(crate) mod plan;
pub(crate) mod result;

pub use cancel::CancelToken;
pub use compare::{compare_at, Comparison, ComparisonResult};
pub use plan::SearchPlan;
pub use result::{ResultSet, SearchStats, SearchStatus};

use crate::dispatch::{self, DispatchPolicy, WindowJob};
use crate::image::luma::to_luma;
use crate::metric::Metric;
use crate::trace::{trace_debug, trace_event, trace_span};
use crate::util::PatchCmpResult;
use crate::ImageView;

/// Window sizes offered by the interactive tool.
pub const WINDOW_SIZE_PRESETS: [usize; 4] = [32, 64, 128, 256];

/// Grid sizes offered by the interactive tool.
pub const GRID_SIZE_PRESETS: [usize; 5] = [10, 20, 30, 40, 50];

/// Candidate counts above this use the worker pool under [`DispatchPolicy::Auto`].
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1000;

/// Which candidate the score favors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Positive where A is closer to the ground truth and B is farther.
    #[default]
    PreferA,
    /// Positive where B is closer to the ground truth and A is farther.
    PreferB,
}

impl Mode {
    /// Signed score from the two candidate distances.
    #[inline]
    pub fn score(self, dist_a_gt: f64, dist_b_gt: f64) -> f64 {
        match self {
            Mode::PreferA => dist_b_gt - dist_a_gt,
            Mode::PreferB => dist_a_gt - dist_b_gt,
        }
    }
}

/// Channel handling for the comparison.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorMode {
    /// Compare every channel as given.
    #[default]
    FullColor,
    /// Reduce all three images to luma once before searching.
    SingleChannel,
}

/// Configuration for one search.
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// Side length of the square window in pixels.
    pub window_size: usize,
    /// Side length of a grid cell over window start positions.
    pub grid_size: usize,
    /// Distance metric between a candidate and the ground truth.
    pub metric: Metric,
    /// Which candidate a positive score favors.
    pub mode: Mode,
    /// Full-color or luma comparison.
    pub color_mode: ColorMode,
    /// Scheduling of window evaluations.
    pub dispatch: DispatchPolicy,
    /// Candidate count above which `Auto` dispatch goes parallel.
    pub parallel_threshold: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            window_size: WINDOW_SIZE_PRESETS[0],
            grid_size: GRID_SIZE_PRESETS[1],
            metric: Metric::Mse,
            mode: Mode::PreferA,
            color_mode: ColorMode::FullColor,
            dispatch: DispatchPolicy::Auto,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

/// Patch search engine.
#[derive(Clone, Debug, Default)]
pub struct Searcher {
    cfg: SearchConfig,
    cancel: Option<CancelToken>,
}

impl Searcher {
    /// Creates a searcher with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the search configuration.
    pub fn with_config(mut self, cfg: SearchConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Attaches a cancellation token checked between row batches.
    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.cfg
    }

    /// Plans the search without running it.
    pub fn plan(
        &self,
        a: ImageView<'_, u8>,
        b: ImageView<'_, u8>,
        gt: ImageView<'_, u8>,
    ) -> PatchCmpResult<SearchPlan> {
        SearchPlan::for_views(a, b, gt, self.cfg.window_size, self.cfg.grid_size)
    }

    /// Searches candidates `a` and `b` against ground truth `gt`.
    ///
    /// Fails before any comparison when the window does not fit the common
    /// overlap or the configuration is unusable. Full-color comparison of
    /// images with different channel layouts yields no valid windows and
    /// reports [`SearchStatus::NoValidComparisons`].
    pub fn search(
        &self,
        a: ImageView<'_, u8>,
        b: ImageView<'_, u8>,
        gt: ImageView<'_, u8>,
    ) -> PatchCmpResult<ResultSet> {
        let cfg = &self.cfg;
        let plan = self.plan(a, b, gt)?;

        let parallel = cfg
            .dispatch
            .use_parallel(plan.candidates(), cfg.parallel_threshold);
        let _span = trace_span!(
            "search",
            window = cfg.window_size,
            grid = cfg.grid_size,
            candidates = plan.candidates(),
            parallel = parallel
        )
        .entered();
        trace_debug!(
            "search_plan",
            max_x = plan.max_x(),
            max_y = plan.max_y(),
            cells = plan.cell_count()
        );

        let lumas;
        let (a, b, gt) = match cfg.color_mode {
            ColorMode::FullColor => (a, b, gt),
            ColorMode::SingleChannel => {
                lumas = [to_luma(a)?, to_luma(b)?, to_luma(gt)?];
                (lumas[0].view(), lumas[1].view(), lumas[2].view())
            }
        };

        let job = WindowJob {
            a,
            b,
            gt,
            window_size: cfg.window_size,
            mode: cfg.mode,
            metric: cfg.metric,
        };
        let cancel = self.cancel.clone().unwrap_or_default();
        let comparisons = dispatch::select(parallel).evaluate_all(&job, &plan, &cancel)?;
        trace_event!("search_candidates", count = comparisons.len());

        let results = ResultSet::from_comparisons(comparisons, cfg.grid_size, parallel);
        trace_event!(
            "search_cells",
            count = results.len(),
            valid = results.stats().valid
        );
        Ok(results)
    }
}

/// Runs one search with `cfg`.
pub fn search(
    a: ImageView<'_, u8>,
    b: ImageView<'_, u8>,
    gt: ImageView<'_, u8>,
    cfg: &SearchConfig,
) -> PatchCmpResult<ResultSet> {
    Searcher::new().with_config(cfg.clone()).search(a, b, gt)
}
