//! The four problem strategies and a runtime selector over them.

use super::types::GraphProblem;
use crate::error::{GraphOptError, Result};
use crate::graph::Graph;
use crate::neighborhood::{propose_exchange, propose_flip, propose_removal, propose_swap, Move};
use crate::objective;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Penalty per uncovered edge when a vertex-cover assignment is scored
/// outside the feasibility-preserving annealing moves.
pub const UNCOVERED_PENALTY: f64 = 2.0;

/// Flip gain shared by the two cut problems: uncut minus cut incident weight.
///
/// Equals `weighted_degree[i] - 2 * cut_weight[i]`; the factor 2 comes from
/// every edge being seen from both endpoints in the adjacency.
fn cut_flip_gains(x: &[bool], graph: &Graph, gains: &mut [f64]) {
    for (i, gain) in gains.iter_mut().enumerate() {
        let cut: f64 = graph
            .neighbors(i)
            .iter()
            .filter(|n| x[n.node] != x[i])
            .map(|n| n.weight)
            .sum();
        *gain = graph.weighted_degree(i) - 2.0 * cut;
    }
}

/// Max-cut: single-node flips.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxCut;

impl GraphProblem for MaxCut {
    fn name(&self) -> &'static str {
        "maxcut"
    }

    fn score(&self, x: &[bool], graph: &Graph) -> f64 {
        objective::maxcut(x, graph)
    }

    fn propose<R: Rng>(
        &self,
        x: &[bool],
        _: &Graph,
        _: usize,
        rng: &mut R,
    ) -> Result<Option<Move>> {
        propose_flip(x, rng).map(Some)
    }

    fn flip_gains(&self, x: &[bool], graph: &Graph, gains: &mut [f64]) {
        cut_flip_gains(x, graph, gains);
    }
}

/// Balanced graph partitioning: label swaps keep group sizes fixed.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphPartitioning;

impl GraphProblem for GraphPartitioning {
    fn name(&self) -> &'static str {
        "graph_partitioning"
    }

    fn score(&self, x: &[bool], graph: &Graph) -> f64 {
        objective::graph_partitioning(x, graph)
    }

    fn propose<R: Rng>(
        &self,
        x: &[bool],
        _: &Graph,
        _: usize,
        rng: &mut R,
    ) -> Result<Option<Move>> {
        propose_swap(x, rng).map(Some)
    }

    fn flip_gains(&self, x: &[bool], graph: &Graph, gains: &mut [f64]) {
        cut_flip_gains(x, graph, gains);
    }
}

/// Minimum vertex cover, scored as the negated cover size.
///
/// Feasible assignments score `-(cover size)`. Each uncovered edge costs
/// another `uncovered_penalty`; annealing never produces one, but the
/// batched local search flips freely and needs infeasible states ordered.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MinimumVertexCover {
    pub uncovered_penalty: f64,
}

impl Default for MinimumVertexCover {
    fn default() -> Self {
        Self {
            uncovered_penalty: UNCOVERED_PENALTY,
        }
    }
}

impl GraphProblem for MinimumVertexCover {
    fn name(&self) -> &'static str {
        "minimum_vertex_cover"
    }

    fn score(&self, x: &[bool], graph: &Graph) -> f64 {
        -objective::minimum_vertex_cover(x, graph)
            - self.uncovered_penalty * objective::uncovered_edges(x, graph) as f64
    }

    fn propose<R: Rng>(
        &self,
        x: &[bool],
        graph: &Graph,
        budget: usize,
        rng: &mut R,
    ) -> Result<Option<Move>> {
        propose_removal(x, graph, budget, rng)
    }

    fn validate_start(&self, x: &[bool], graph: &Graph) -> Result<()> {
        if objective::cover_all_edges(x, graph) {
            Ok(())
        } else {
            Err(GraphOptError::InfeasibleStart(format!(
                "{} edges are not covered",
                objective::uncovered_edges(x, graph)
            )))
        }
    }

    fn flip_gains(&self, x: &[bool], graph: &Graph, gains: &mut [f64]) {
        for (i, gain) in gains.iter_mut().enumerate() {
            let open = graph.neighbors(i).iter().filter(|n| !x[n.node]).count() as f64;
            *gain = if x[i] {
                1.0 - self.uncovered_penalty * open
            } else {
                -1.0 + self.uncovered_penalty * open
            };
        }
    }
}

/// Maximum independent set with a per-conflict penalty.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaximumIndependentSet {
    pub penalty: f64,
}

impl Default for MaximumIndependentSet {
    fn default() -> Self {
        Self {
            penalty: objective::CONFLICT_PENALTY,
        }
    }
}

impl GraphProblem for MaximumIndependentSet {
    fn name(&self) -> &'static str {
        "maximum_independent_set"
    }

    fn score(&self, x: &[bool], graph: &Graph) -> f64 {
        objective::independent_set_score(x, graph, self.penalty)
    }

    fn propose<R: Rng>(
        &self,
        x: &[bool],
        _: &Graph,
        _: usize,
        rng: &mut R,
    ) -> Result<Option<Move>> {
        propose_exchange(x, rng).map(Some)
    }

    fn default_num_steps(&self, graph: &Graph) -> usize {
        100 * graph.num_nodes()
    }

    fn flip_gains(&self, x: &[bool], graph: &Graph, gains: &mut [f64]) {
        for (i, gain) in gains.iter_mut().enumerate() {
            let taken = graph.neighbors(i).iter().filter(|n| x[n.node]).count() as f64;
            *gain = if x[i] {
                -1.0 + self.penalty * taken
            } else {
                1.0 - self.penalty * taken
            };
        }
    }
}

/// Runtime choice of problem, for callers that pick the kind from
/// configuration. Each variant delegates to the default-parameter strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ProblemKind {
    MaxCut,
    GraphPartitioning,
    MinimumVertexCover,
    MaximumIndependentSet,
}

impl ProblemKind {
    pub const ALL: [ProblemKind; 4] = [
        ProblemKind::MaxCut,
        ProblemKind::GraphPartitioning,
        ProblemKind::MinimumVertexCover,
        ProblemKind::MaximumIndependentSet,
    ];
}

macro_rules! dispatch {
    ($kind:expr, $p:ident => $body:expr) => {
        match $kind {
            ProblemKind::MaxCut => {
                let $p = MaxCut;
                $body
            }
            ProblemKind::GraphPartitioning => {
                let $p = GraphPartitioning;
                $body
            }
            ProblemKind::MinimumVertexCover => {
                let $p = MinimumVertexCover::default();
                $body
            }
            ProblemKind::MaximumIndependentSet => {
                let $p = MaximumIndependentSet::default();
                $body
            }
        }
    };
}

impl GraphProblem for ProblemKind {
    fn name(&self) -> &'static str {
        dispatch!(self, p => p.name())
    }

    fn score(&self, x: &[bool], graph: &Graph) -> f64 {
        dispatch!(self, p => p.score(x, graph))
    }

    fn propose<R: Rng>(
        &self,
        x: &[bool],
        graph: &Graph,
        budget: usize,
        rng: &mut R,
    ) -> Result<Option<Move>> {
        dispatch!(self, p => p.propose(x, graph, budget, rng))
    }

    fn default_num_steps(&self, graph: &Graph) -> usize {
        dispatch!(self, p => p.default_num_steps(graph))
    }

    fn validate_start(&self, x: &[bool], graph: &Graph) -> Result<()> {
        dispatch!(self, p => p.validate_start(x, graph))
    }

    fn flip_gains(&self, x: &[bool], graph: &Graph, gains: &mut [f64]) {
        dispatch!(self, p => p.flip_gains(x, graph, gains))
    }
}

impl fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProblemKind {
    type Err = GraphOptError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "maxcut" | "max_cut" => Ok(Self::MaxCut),
            "graph_partitioning" | "partitioning" => Ok(Self::GraphPartitioning),
            "minimum_vertex_cover" | "vertex_cover" | "mvc" => Ok(Self::MinimumVertexCover),
            "maximum_independent_set" | "independent_set" | "mis" => {
                Ok(Self::MaximumIndependentSet)
            }
            other => Err(GraphOptError::InvalidConfig(format!(
                "unknown problem kind {other:?}"
            ))),
        }
    }
}
