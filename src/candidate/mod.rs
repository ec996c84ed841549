//! Candidate reduction and ranking.
//!
//! Keeps one best window per grid cell and orders the survivors by score.

pub(crate) mod cell;
pub(crate) mod rank;
