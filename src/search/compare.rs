//! Single-window comparison of two candidates against a ground truth.

use crate::metric::{evaluate, Metric};
use crate::search::Mode;
use crate::util::PatchCmpResult;
use crate::ImageView;

/// Scored window position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComparisonResult {
    /// Window left edge.
    pub x: usize,
    /// Window top edge.
    pub y: usize,
    /// Signed preference; positive favors the preferred candidate.
    pub score: f64,
    /// Distance between candidate A and the ground truth.
    pub dist_a_gt: f64,
    /// Distance between candidate B and the ground truth.
    pub dist_b_gt: f64,
}

impl ComparisonResult {
    /// Absolute gap between the two candidate distances.
    pub fn gap(&self) -> f64 {
        (self.dist_a_gt - self.dist_b_gt).abs()
    }
}

/// Outcome of comparing one window position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Comparison {
    /// The window fit all three images.
    Valid(ComparisonResult),
    /// The window crossed the edge of at least one image, or the candidates
    /// and ground truth do not share a channel layout.
    Invalid,
}

impl Comparison {
    /// Returns the result for a valid window.
    pub fn valid(self) -> Option<ComparisonResult> {
        match self {
            Comparison::Valid(result) => Some(result),
            Comparison::Invalid => None,
        }
    }
}

/// Compares the `size`x`size` window at `(x, y)`.
///
/// Windows that do not fit all three images, or whose regions differ in
/// channel count, come back as [`Comparison::Invalid`].
#[allow(clippy::too_many_arguments)]
pub fn compare_at(
    a: ImageView<'_, u8>,
    b: ImageView<'_, u8>,
    gt: ImageView<'_, u8>,
    x: usize,
    y: usize,
    size: usize,
    mode: Mode,
    metric: Metric,
) -> PatchCmpResult<Comparison> {
    if !(a.fits(x, y, size) && b.fits(x, y, size) && gt.fits(x, y, size)) {
        return Ok(Comparison::Invalid);
    }
    if a.channels() != gt.channels() || b.channels() != gt.channels() {
        return Ok(Comparison::Invalid);
    }

    let region_a = a.roi(x, y, size, size)?;
    let region_b = b.roi(x, y, size, size)?;
    let region_gt = gt.roi(x, y, size, size)?;

    let dist_a_gt = evaluate(region_a, region_gt, metric)?;
    let dist_b_gt = evaluate(region_b, region_gt, metric)?;

    Ok(Comparison::Valid(ComparisonResult {
        x,
        y,
        score: mode.score(dist_a_gt, dist_b_gt),
        dist_a_gt,
        dist_b_gt,
    }))
}
