//! Rayon worker-pool dispatch (feature-gated).
//!
//! Rows are distributed across the global rayon pool, which is sized to the
//! available cores. Each row writes into its own slice of one preallocated
//! buffer, so the output order matches sequential dispatch.

use crate::dispatch::{Dispatch, WindowJob};
use crate::search::cancel::CancelToken;
use crate::search::compare::Comparison;
use crate::search::plan::SearchPlan;
use crate::util::PatchCmpResult;
use rayon::prelude::*;

/// Evaluates windows row-parallel on the rayon pool.
#[derive(Clone, Copy, Debug, Default)]
pub struct RayonDispatch;

impl Dispatch for RayonDispatch {
    fn evaluate_all(
        &self,
        job: &WindowJob<'_>,
        plan: &SearchPlan,
        cancel: &CancelToken,
    ) -> PatchCmpResult<Vec<Comparison>> {
        let row_len = plan.max_x() + 1;
        let mut out = vec![Comparison::Invalid; plan.candidates()];
        out.par_chunks_mut(row_len)
            .enumerate()
            .try_for_each(|(y, row)| -> PatchCmpResult<()> {
                cancel.check()?;
                for (x, slot) in row.iter_mut().enumerate() {
                    *slot = job.evaluate(x, y)?;
                }
                Ok(())
            })?;
        Ok(out)
    }
}
