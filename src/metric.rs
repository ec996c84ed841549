//! Region dissimilarity metrics.

use crate::kernel::{ActiveDiff, DiffKernel, DiffSums};
use crate::util::{PatchCmpError, PatchCmpResult};
use crate::ImageView;

/// Dissimilarity metric between two regions; lower means more similar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Mean of squared per-sample differences.
    #[default]
    Mse,
    /// Mean of absolute per-sample differences.
    Mae,
    /// Labelled "structural similarity" but computed as mean absolute
    /// difference, exactly like [`Metric::Mae`].
    SsimProxy,
}

impl Metric {
    /// Derives the metric value from accumulated difference sums.
    pub fn reduce(self, sums: DiffSums) -> f64 {
        if sums.samples == 0 {
            return 0.0;
        }
        let n = sums.samples as f64;
        match self {
            Metric::Mse => sums.sq as f64 / n,
            Metric::Mae | Metric::SsimProxy => sums.abs as f64 / n,
        }
    }
}

/// Evaluates `metric` over two regions of identical shape.
///
/// All channels of all pixels contribute. Differences are taken on the
/// integer sample values without wraparound.
pub fn evaluate(
    region_a: ImageView<'_, u8>,
    region_b: ImageView<'_, u8>,
    metric: Metric,
) -> PatchCmpResult<f64> {
    if region_a.shape() != region_b.shape() {
        return Err(PatchCmpError::ShapeMismatch {
            left: region_a.shape(),
            right: region_b.shape(),
        });
    }
    Ok(metric.reduce(ActiveDiff::diff_sums(region_a, region_b)))
}
