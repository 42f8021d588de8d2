//! Problem strategies.
//!
//! Each assignment problem is a [`GraphProblem`] implementation bundling its
//! objective and its move generator. [`ProblemKind`] selects one at runtime.

mod kinds;
mod types;

pub use kinds::{
    GraphPartitioning, MaxCut, MaximumIndependentSet, MinimumVertexCover, ProblemKind,
    UNCOVERED_PENALTY,
};
pub use types::GraphProblem;
