//! Per-sample difference kernels.
//!
//! A kernel walks two equally-shaped regions row by row and accumulates exact
//! integer sums of absolute and squared sample differences. Metrics are
//! derived from these sums, so every kernel produces identical metric values.

use crate::ImageView;

/// Exact difference sums over two regions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DiffSums {
    /// Sum of `|a - b|` over all samples.
    pub abs: u64,
    /// Sum of `(a - b)^2` over all samples.
    pub sq: u64,
    /// Number of samples visited.
    pub samples: u64,
}

impl DiffSums {
    pub(crate) fn add(&mut self, other: DiffSums) {
        self.abs += other.abs;
        self.sq += other.sq;
        self.samples += other.samples;
    }
}

/// Kernel trait for difference accumulation.
pub trait DiffKernel {
    /// Accumulates difference sums over two regions.
    ///
    /// Callers guarantee that both views share width, height and channels;
    /// rows are paired up to the shorter of the two otherwise.
    fn diff_sums(a: ImageView<'_, u8>, b: ImageView<'_, u8>) -> DiffSums;
}

pub mod scalar;

#[cfg(feature = "simd")]
pub mod simd;

#[cfg(not(feature = "simd"))]
pub(crate) use scalar::ScalarDiff as ActiveDiff;
#[cfg(feature = "simd")]
pub(crate) use simd::SimdDiff as ActiveDiff;
