//! Cooperative cancellation for long searches.

use crate::util::{PatchCmpError, PatchCmpResult};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared flag checked between dispatched row batches.
///
/// Clones share the same flag, so a token handed to a [`Searcher`] can be
/// cancelled from another thread.
///
/// [`Searcher`]: crate::search::Searcher
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Creates a token that is not cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Returns true once cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    pub(crate) fn check(&self) -> PatchCmpResult<()> {
        if self.is_cancelled() {
            Err(PatchCmpError::Cancelled)
        } else {
            Ok(())
        }
    }
}
