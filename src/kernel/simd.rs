//! SIMD difference kernel using the `wide` crate.
//!
//! Rows are processed 8 samples at a time in `f32x8` lanes. Every partial
//! sum is an integer below 2^24, so lane accumulators stay exact; they are
//! flushed into `u64` totals every `FLUSH_CHUNKS` vectors. Results are
//! bit-identical to the scalar kernel.

use crate::kernel::scalar::ScalarDiff;
use crate::kernel::{DiffKernel, DiffSums};
use crate::ImageView;
use wide::f32x8;

const LANES: usize = 8;

/// 256 * 255^2 < 2^24.
const FLUSH_CHUNKS: usize = 256;

#[inline]
fn load_u8x8_as_f32x8(slice: &[u8]) -> f32x8 {
    f32x8::from([
        slice[0] as f32,
        slice[1] as f32,
        slice[2] as f32,
        slice[3] as f32,
        slice[4] as f32,
        slice[5] as f32,
        slice[6] as f32,
        slice[7] as f32,
    ])
}

/// Horizontal sum of integer-valued lanes.
#[inline]
fn hsum_exact(v: f32x8) -> u64 {
    v.to_array().iter().map(|&lane| lane as u64).sum()
}

/// SIMD-accelerated difference kernel.
pub struct SimdDiff;

impl SimdDiff {
    fn row_sums(row_a: &[u8], row_b: &[u8]) -> DiffSums {
        let len = row_a.len().min(row_b.len());
        let simd_end = len / LANES * LANES;

        let mut sums = DiffSums::default();
        let mut abs_vec = f32x8::ZERO;
        let mut sq_vec = f32x8::ZERO;
        let mut pending = 0usize;

        for (chunk_a, chunk_b) in row_a[..simd_end]
            .chunks_exact(LANES)
            .zip(row_b[..simd_end].chunks_exact(LANES))
        {
            let diff = load_u8x8_as_f32x8(chunk_a) - load_u8x8_as_f32x8(chunk_b);
            abs_vec = abs_vec + diff.abs();
            sq_vec = sq_vec + diff * diff;
            pending += 1;
            if pending == FLUSH_CHUNKS {
                sums.abs += hsum_exact(abs_vec);
                sums.sq += hsum_exact(sq_vec);
                abs_vec = f32x8::ZERO;
                sq_vec = f32x8::ZERO;
                pending = 0;
            }
        }
        sums.abs += hsum_exact(abs_vec);
        sums.sq += hsum_exact(sq_vec);
        sums.samples = simd_end as u64;

        sums.add(ScalarDiff::row_sums(&row_a[simd_end..len], &row_b[simd_end..len]));
        sums
    }
}

impl DiffKernel for SimdDiff {
    fn diff_sums(a: ImageView<'_, u8>, b: ImageView<'_, u8>) -> DiffSums {
        let mut total = DiffSums::default();
        for (row_a, row_b) in a.rows().zip(b.rows()) {
            total.add(Self::row_sums(row_a, row_b));
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::SimdDiff;
    use crate::kernel::scalar::ScalarDiff;
    use crate::kernel::DiffKernel;
    use crate::ImageView;

    fn pattern(len: usize, seed: usize) -> Vec<u8> {
        (0..len)
            .map(|i| ((i * 31 + seed * 17) ^ (i >> 3)) as u8)
            .collect()
    }

    #[test]
    fn matches_scalar_on_odd_widths() {
        for &(width, height, channels) in &[(1, 1, 1), (13, 7, 3), (37, 5, 4), (700, 3, 4)] {
            let a = pattern(width * height * channels, 1);
            let b = pattern(width * height * channels, 2);
            let va = ImageView::from_interleaved(&a, width, height, channels).unwrap();
            let vb = ImageView::from_interleaved(&b, width, height, channels).unwrap();
            assert_eq!(SimdDiff::diff_sums(va, vb), ScalarDiff::diff_sums(va, vb));
        }
    }

    #[test]
    fn long_rows_stay_exact() {
        let width = LONG_ROW;
        let a = vec![255u8; width];
        let b = vec![0u8; width];
        let va = ImageView::from_slice(&a, width, 1).unwrap();
        let vb = ImageView::from_slice(&b, width, 1).unwrap();
        let sums = SimdDiff::diff_sums(va, vb);
        assert_eq!(sums.sq, 65025 * width as u64);
        assert_eq!(sums.abs, 255 * width as u64);
    }

    const LONG_ROW: usize = 8 * 1000 + 5;
}
