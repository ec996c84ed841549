//! patchcmp finds the windows where one candidate image matches a ground
//! truth better than another.
//!
//! Given two candidates A and B and a ground truth, the search scores every
//! square window in the common overlap by how much closer the preferred
//! candidate is to the ground truth, keeps the best window per grid cell and
//! ranks those by score. [`ResultNavigator`] walks the ranked list.
//!
//! Window evaluation runs on the rayon pool for large searches (`rayon`
//! feature, on by default). Difference sums can use SIMD lanes via the
//! `simd` feature; results are identical either way.

mod trace;

mod candidate;
pub mod dispatch;
pub mod image;
pub mod kernel;
pub mod lowlevel;
pub mod metric;
pub mod navigate;
pub mod search;
pub mod util;

#[cfg(feature = "image-io")]
pub use image::io;

pub use candidate::cell::{CellBounds, GridCell};
pub use dispatch::DispatchPolicy;
pub use image::{ImageView, OwnedImage};
pub use metric::Metric;
pub use navigate::ResultNavigator;
pub use search::{
    search, CancelToken, ColorMode, Comparison, ComparisonResult, Mode, ResultSet, SearchConfig,
    SearchPlan, SearchStats, SearchStatus, Searcher,
};
pub use util::{PatchCmpError, PatchCmpResult};
