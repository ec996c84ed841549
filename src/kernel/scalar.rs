//! Scalar reference kernel.

use crate::kernel::{DiffKernel, DiffSums};
use crate::ImageView;

/// Scalar difference kernel.
pub struct ScalarDiff;

impl ScalarDiff {
    /// Accumulates sums over one pair of rows.
    #[inline]
    pub(crate) fn row_sums(row_a: &[u8], row_b: &[u8]) -> DiffSums {
        let mut sums = DiffSums::default();
        for (&va, &vb) in row_a.iter().zip(row_b) {
            let diff = u64::from(va.abs_diff(vb));
            sums.abs += diff;
            sums.sq += diff * diff;
        }
        sums.samples = row_a.len().min(row_b.len()) as u64;
        sums
    }
}

impl DiffKernel for ScalarDiff {
    fn diff_sums(a: ImageView<'_, u8>, b: ImageView<'_, u8>) -> DiffSums {
        let mut total = DiffSums::default();
        for (row_a, row_b) in a.rows().zip(b.rows()) {
            total.add(Self::row_sums(row_a, row_b));
        }
        total
    }
}
