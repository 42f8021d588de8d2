//! Random benchmark instances.
//!
//! Synthetic Erdos-Renyi and Barabasi-Albert graphs with unit weights, the
//! two families commonly used to benchmark max-cut and related heuristics.

use super::model::Graph;
use crate::error::{GraphOptError, Result};
use rand::Rng;

/// G(n, p): every unordered pair becomes an edge independently with probability `p`.
pub fn erdos_renyi<R: Rng>(num_nodes: usize, p: f64, rng: &mut R) -> Result<Graph> {
    if !(0.0..=1.0).contains(&p) {
        return Err(GraphOptError::InvalidConfig(format!(
            "edge probability must be in [0, 1], got {p}"
        )));
    }

    let mut edges = Vec::new();
    for u in 0..num_nodes {
        for v in (u + 1)..num_nodes {
            if rng.random_range(0.0..1.0) < p {
                edges.push((u, v, 1.0));
            }
        }
    }
    Graph::new(num_nodes, edges)
}

/// Preferential attachment: each new node links to `m` distinct existing
/// nodes chosen with probability proportional to their degree.
///
/// Starts from a star on the first `m + 1` nodes.
pub fn barabasi_albert<R: Rng>(num_nodes: usize, m: usize, rng: &mut R) -> Result<Graph> {
    if m == 0 || m >= num_nodes {
        return Err(GraphOptError::InvalidConfig(format!(
            "attachment count must be in [1, {num_nodes}), got {m}"
        )));
    }

    let mut edges = Vec::with_capacity(m * num_nodes);
    // Each endpoint appears once per incident edge, so uniform picks are degree-proportional.
    let mut endpoints: Vec<usize> = Vec::with_capacity(2 * m * num_nodes);

    for v in 1..=m {
        edges.push((0, v, 1.0));
        endpoints.push(0);
        endpoints.push(v);
    }

    let mut targets = Vec::with_capacity(m);
    for v in (m + 1)..num_nodes {
        targets.clear();
        while targets.len() < m {
            let t = endpoints[rng.random_range(0..endpoints.len())];
            if !targets.contains(&t) {
                targets.push(t);
            }
        }
        for &t in &targets {
            edges.push((t, v, 1.0));
            endpoints.push(t);
            endpoints.push(v);
        }
    }

    Graph::new(num_nodes, edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use u_numflow::random::create_rng;

    #[test]
    fn test_erdos_renyi_extremes() {
        let mut rng = create_rng(7);
        let empty = erdos_renyi(10, 0.0, &mut rng).unwrap();
        assert_eq!(empty.num_edges(), 0);

        let complete = erdos_renyi(10, 1.0, &mut rng).unwrap();
        assert_eq!(complete.num_edges(), 45);
    }

    #[test]
    fn test_erdos_renyi_bad_probability() {
        let mut rng = create_rng(7);
        assert!(erdos_renyi(10, 1.5, &mut rng).is_err());
    }

    #[test]
    fn test_barabasi_albert_edge_count() {
        let mut rng = create_rng(11);
        let g = barabasi_albert(50, 3, &mut rng).unwrap();
        assert_eq!(g.num_nodes(), 50);
        // star of 3 edges, then 3 edges for each of the remaining 46 nodes
        assert_eq!(g.num_edges(), 3 + 46 * 3);
        for node in 0..50 {
            assert!(g.degree(node) >= 1);
        }
    }

    #[test]
    fn test_barabasi_albert_bad_m() {
        let mut rng = create_rng(11);
        assert!(barabasi_albert(5, 0, &mut rng).is_err());
        assert!(barabasi_albert(5, 5, &mut rng).is_err());
    }
}
