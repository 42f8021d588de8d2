//! Core trait for graph assignment problems.

use crate::error::Result;
use crate::graph::Graph;
use crate::neighborhood::Move;
use rand::Rng;

/// A problem kind as seen by the solvers.
///
/// Each implementation bundles the objective and the move generator of one
/// problem. A strategy is chosen once per run and passed by reference into
/// [`AnnealingRunner`](crate::sa::AnnealingRunner) or
/// [`BatchedLocalSearch`](crate::local_search::BatchedLocalSearch).
///
/// # Maximization
///
/// Both solvers treat a higher [`score`](GraphProblem::score) as better.
/// Problems whose natural objective is minimized (vertex cover) negate it
/// here.
pub trait GraphProblem: Send + Sync {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// Scores an assignment. Higher is better.
    fn score(&self, x: &[bool], graph: &Graph) -> f64;

    /// Proposes a move from `x`.
    ///
    /// `budget` bounds any internal retry loop that may legitimately fail
    /// (the vertex-cover removal search). `Ok(None)` means no move this step.
    fn propose<R: Rng>(
        &self,
        x: &[bool],
        graph: &Graph,
        budget: usize,
        rng: &mut R,
    ) -> Result<Option<Move>>;

    /// Number of annealing steps when the caller does not pick one.
    fn default_num_steps(&self, graph: &Graph) -> usize {
        graph.num_nodes()
    }

    /// Checks that `x` is an acceptable starting point.
    fn validate_start(&self, _x: &[bool], _graph: &Graph) -> Result<()> {
        Ok(())
    }

    /// Writes into `gains[i]` the score change of flipping node `i` alone.
    ///
    /// Used as the flip priority signal of the batched local search.
    fn flip_gains(&self, x: &[bool], graph: &Graph, gains: &mut [f64]);
}
