//! Single-threaded dispatch.

use crate::dispatch::{Dispatch, WindowJob};
use crate::search::cancel::CancelToken;
use crate::search::compare::Comparison;
use crate::search::plan::SearchPlan;
use crate::util::PatchCmpResult;

/// Evaluates windows on the calling thread, row by row.
#[derive(Clone, Copy, Debug, Default)]
pub struct SequentialDispatch;

impl Dispatch for SequentialDispatch {
    fn evaluate_all(
        &self,
        job: &WindowJob<'_>,
        plan: &SearchPlan,
        cancel: &CancelToken,
    ) -> PatchCmpResult<Vec<Comparison>> {
        let mut out = Vec::with_capacity(plan.candidates());
        for y in 0..=plan.max_y() {
            cancel.check()?;
            for x in 0..=plan.max_x() {
                out.push(job.evaluate(x, y)?);
            }
        }
        Ok(out)
    }
}
