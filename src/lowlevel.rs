//! Low-level building blocks for custom search pipelines.
//!
//! These expose the difference kernels, dispatch strategies and cell
//! reduction behind [`Searcher`](crate::Searcher). Most users should prefer
//! the top-level `Searcher` and `ResultNavigator` types.

pub use crate::candidate::cell::best_per_cell;
pub use crate::candidate::rank::sort_results_desc;
pub use crate::dispatch::{Dispatch, SequentialDispatch, WindowJob};
pub use crate::image::luma::to_luma;
pub use crate::kernel::scalar::ScalarDiff;
pub use crate::kernel::{DiffKernel, DiffSums};
pub use crate::metric::evaluate;
pub use crate::search::compare_at;

#[cfg(feature = "rayon")]
pub use crate::dispatch::RayonDispatch;
#[cfg(feature = "simd")]
pub use crate::kernel::simd::SimdDiff;
