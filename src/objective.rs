//! Objective functions for the four assignment problems.
//!
//! All functions are pure and run in O(V) or O(E). An assignment is a
//! `&[bool]` with one label per node; its length must equal
//! `graph.num_nodes()`.
//!
//! Max-cut, graph partitioning and independent set are maximized. The
//! vertex-cover objective is the cover size and is *minimized*; the
//! [`MinimumVertexCover`](crate::problem::MinimumVertexCover) strategy
//! negates it so the solvers can keep a single "higher is better"
//! comparison.

use crate::graph::Graph;

/// Penalty charged per edge whose endpoints are both selected in an
/// independent-set assignment.
pub const CONFLICT_PENALTY: f64 = 2.0;

/// Total weight of edges whose endpoints carry different labels.
pub fn maxcut(x: &[bool], graph: &Graph) -> f64 {
    debug_assert_eq!(x.len(), graph.num_nodes());
    graph
        .edges()
        .iter()
        .filter(|e| x[e.u] != x[e.v])
        .map(|e| e.weight)
        .sum()
}

/// Cut weight between the two partition labels.
///
/// Balance between the groups is the caller's responsibility (the swap move
/// preserves it); this function does not check it.
pub fn graph_partitioning(x: &[bool], graph: &Graph) -> f64 {
    maxcut(x, graph)
}

/// Size of the cover, to be minimized.
pub fn minimum_vertex_cover(x: &[bool], graph: &Graph) -> f64 {
    debug_assert_eq!(x.len(), graph.num_nodes());
    selected_count(x) as f64
}

/// True iff every edge has at least one selected endpoint.
pub fn cover_all_edges(x: &[bool], graph: &Graph) -> bool {
    debug_assert_eq!(x.len(), graph.num_nodes());
    graph.edges().iter().all(|e| x[e.u] || x[e.v])
}

/// Number of edges with no selected endpoint.
pub fn uncovered_edges(x: &[bool], graph: &Graph) -> usize {
    graph.edges().iter().filter(|e| !x[e.u] && !x[e.v]).count()
}

/// Selected count minus [`CONFLICT_PENALTY`] per conflicting edge.
///
/// Non-independent sets remain scoreable, just discouraged.
pub fn maximum_independent_set(x: &[bool], graph: &Graph) -> f64 {
    independent_set_score(x, graph, CONFLICT_PENALTY)
}

/// Selected count minus `penalty` per edge with both endpoints selected.
pub fn independent_set_score(x: &[bool], graph: &Graph, penalty: f64) -> f64 {
    debug_assert_eq!(x.len(), graph.num_nodes());
    selected_count(x) as f64 - penalty * conflicting_edges(x, graph) as f64
}

/// Number of edges with both endpoints selected.
pub fn conflicting_edges(x: &[bool], graph: &Graph) -> usize {
    graph.edges().iter().filter(|e| x[e.u] && x[e.v]).count()
}

pub fn is_independent_set(x: &[bool], graph: &Graph) -> bool {
    conflicting_edges(x, graph) == 0
}

/// Number of nodes labeled `true`.
pub fn selected_count(x: &[bool]) -> usize {
    x.iter().filter(|&&b| b).count()
}

/// Sizes of the `false` and `true` groups.
pub fn partition_sizes(x: &[bool]) -> (usize, usize) {
    let ones = selected_count(x);
    (x.len() - ones, ones)
}
