//! Immutable weighted graph with compressed adjacency.

use crate::error::{GraphOptError, Result};

/// An undirected weighted edge between two distinct nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub u: usize,
    pub v: usize,
    pub weight: f64,
}

impl Edge {
    pub fn new(u: usize, v: usize, weight: f64) -> Self {
        Self { u, v, weight }
    }
}

impl From<(usize, usize, f64)> for Edge {
    fn from((u, v, weight): (usize, usize, f64)) -> Self {
        Self { u, v, weight }
    }
}

/// One entry of a node's adjacency list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub node: usize,
    pub weight: f64,
}

/// Weighted undirected graph over dense node ids `0..num_nodes`.
///
/// The edge list is kept in insertion order. Adjacency is stored in
/// compressed sparse-row form: the neighbors of node `i` live in
/// `adjacency[offsets[i]..offsets[i + 1]]`, and every edge appears once
/// from each endpoint. Parallel edges are allowed and behave as if their
/// weights were summed.
///
/// # Examples
///
/// ```
/// use u_graphopt::graph::Graph;
///
/// let g = Graph::new(4, vec![(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0), (3, 0, 1.0)]).unwrap();
/// assert_eq!(g.num_edges(), 4);
/// assert_eq!(g.degree(0), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Graph {
    num_nodes: usize,
    edges: Vec<Edge>,
    offsets: Vec<usize>,
    adjacency: Vec<Neighbor>,
    weighted_degrees: Vec<f64>,
}

impl Graph {
    /// Builds a graph, validating every edge.
    ///
    /// Fails with [`GraphOptError::InvalidGraph`] when an endpoint is out of
    /// range, an edge is a self-loop, or a weight is not finite.
    pub fn new(
        num_nodes: usize,
        edges: impl IntoIterator<Item = (usize, usize, f64)>,
    ) -> Result<Self> {
        Self::from_edge_list(num_nodes, edges.into_iter().map(Edge::from).collect())
    }

    /// Builds a graph from already-typed edges. Same validation as [`Graph::new`].
    pub fn from_edge_list(num_nodes: usize, edges: Vec<Edge>) -> Result<Self> {
        for (i, e) in edges.iter().enumerate() {
            if e.u >= num_nodes || e.v >= num_nodes {
                return Err(GraphOptError::InvalidGraph(format!(
                    "edge {i} ({}, {}) has an endpoint outside [0, {num_nodes})",
                    e.u, e.v
                )));
            }
            if e.u == e.v {
                return Err(GraphOptError::InvalidGraph(format!(
                    "edge {i} is a self-loop on node {}",
                    e.u
                )));
            }
            if !e.weight.is_finite() {
                return Err(GraphOptError::InvalidGraph(format!(
                    "edge {i} has non-finite weight {}",
                    e.weight
                )));
            }
        }

        // Counting sort of half-edges into CSR layout.
        let mut offsets = vec![0usize; num_nodes + 1];
        for e in &edges {
            offsets[e.u + 1] += 1;
            offsets[e.v + 1] += 1;
        }
        for i in 0..num_nodes {
            offsets[i + 1] += offsets[i];
        }

        let mut cursor = offsets.clone();
        let mut adjacency = vec![
            Neighbor {
                node: 0,
                weight: 0.0
            };
            2 * edges.len()
        ];
        let mut weighted_degrees = vec![0.0; num_nodes];
        for e in &edges {
            adjacency[cursor[e.u]] = Neighbor {
                node: e.v,
                weight: e.weight,
            };
            cursor[e.u] += 1;
            adjacency[cursor[e.v]] = Neighbor {
                node: e.u,
                weight: e.weight,
            };
            cursor[e.v] += 1;
            weighted_degrees[e.u] += e.weight;
            weighted_degrees[e.v] += e.weight;
        }

        Ok(Self {
            num_nodes,
            edges,
            offsets,
            adjacency,
            weighted_degrees,
        })
    }

    /// Builds a graph whose node count is inferred as the largest endpoint + 1.
    pub fn from_edges(edges: impl IntoIterator<Item = (usize, usize, f64)>) -> Result<Self> {
        let edges: Vec<Edge> = edges.into_iter().map(Edge::from).collect();
        let num_nodes = edges
            .iter()
            .map(|e| e.u.max(e.v) + 1)
            .max()
            .unwrap_or(0);
        Self::from_edge_list(num_nodes, edges)
    }

    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Edges in construction order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Neighbors of `node`, one entry per incident edge.
    ///
    /// # Panics
    /// Panics if `node >= num_nodes`.
    pub fn neighbors(&self, node: usize) -> &[Neighbor] {
        &self.adjacency[self.offsets[node]..self.offsets[node + 1]]
    }

    /// Number of incident edges.
    pub fn degree(&self, node: usize) -> usize {
        self.offsets[node + 1] - self.offsets[node]
    }

    /// Sum of incident edge weights.
    pub fn weighted_degree(&self, node: usize) -> f64 {
        self.weighted_degrees[node]
    }

    /// Sum of all edge weights.
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(|e| e.weight).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle4() -> Graph {
        Graph::new(4, vec![(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0), (3, 0, 1.0)]).unwrap()
    }

    #[test]
    fn test_cycle_adjacency() {
        let g = cycle4();
        assert_eq!(g.num_nodes(), 4);
        assert_eq!(g.num_edges(), 4);
        for node in 0..4 {
            assert_eq!(g.degree(node), 2);
            assert!((g.weighted_degree(node) - 2.0).abs() < 1e-12);
        }
        let mut n0: Vec<usize> = g.neighbors(0).iter().map(|n| n.node).collect();
        n0.sort_unstable();
        assert_eq!(n0, vec![1, 3]);
    }

    #[test]
    fn test_weighted_degree() {
        let g = Graph::new(3, vec![(0, 1, 2.5), (0, 2, -1.0)]).unwrap();
        assert!((g.weighted_degree(0) - 1.5).abs() < 1e-12);
        assert!((g.weighted_degree(1) - 2.5).abs() < 1e-12);
        assert!((g.total_weight() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_isolated_nodes() {
        let g = Graph::new(5, vec![(0, 1, 1.0)]).unwrap();
        assert_eq!(g.degree(4), 0);
        assert!(g.neighbors(4).is_empty());
    }

    #[test]
    fn test_out_of_range_endpoint() {
        let err = Graph::new(3, vec![(0, 3, 1.0)]).unwrap_err();
        assert!(matches!(err, GraphOptError::InvalidGraph(_)));
    }

    #[test]
    fn test_self_loop_rejected() {
        let err = Graph::new(3, vec![(1, 1, 1.0)]).unwrap_err();
        assert!(matches!(err, GraphOptError::InvalidGraph(_)));
    }

    #[test]
    fn test_nan_weight_rejected() {
        let err = Graph::new(2, vec![(0, 1, f64::NAN)]).unwrap_err();
        assert!(matches!(err, GraphOptError::InvalidGraph(_)));
    }

    #[test]
    fn test_from_edges_infers_node_count() {
        let g = Graph::from_edges(vec![(0, 5, 1.0), (2, 3, 1.0)]).unwrap();
        assert_eq!(g.num_nodes(), 6);

        let empty = Graph::from_edges(Vec::new()).unwrap();
        assert_eq!(empty.num_nodes(), 0);
    }
}
