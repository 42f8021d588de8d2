//! Problem-specific move proposal.
//!
//! Every generator takes the current assignment by reference and an
//! explicit random source, and returns a [`Move`] describing which labels
//! change. The caller applies the move to a copy, so the current state is
//! never touched by a proposal.

use crate::error::{GraphOptError, Result};
use crate::graph::Graph;
use rand::Rng;

/// Probability that an independent-set exchange moves a single node in
/// instead of two.
pub const P_SINGLE_SWAP: f64 = 0.05;

/// A change to an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Toggle one label.
    Flip(usize),
    /// Exchange the labels of two nodes.
    Swap(usize, usize),
    /// Deselect one node.
    Remove(usize),
    /// Deselect `out`, select `into`.
    Exchange { out: usize, into: usize },
    /// Deselect `out`, select both of `into`.
    ExchangeTwo { out: usize, into: [usize; 2] },
}

impl Move {
    /// Applies the move in place.
    pub fn apply(&self, x: &mut [bool]) {
        match *self {
            Move::Flip(i) => x[i] = !x[i],
            Move::Swap(a, b) => x.swap(a, b),
            Move::Remove(i) => x[i] = false,
            Move::Exchange { out, into } => {
                x[out] = false;
                x[into] = true;
            }
            Move::ExchangeTwo { out, into } => {
                x[out] = false;
                x[into[0]] = true;
                x[into[1]] = true;
            }
        }
    }
}

/// Max-cut: flip one uniformly chosen node.
pub fn propose_flip<R: Rng>(x: &[bool], rng: &mut R) -> Result<Move> {
    if x.is_empty() {
        return Err(GraphOptError::EmptyCandidateSet("no nodes to flip"));
    }
    Ok(Move::Flip(rng.random_range(0..x.len())))
}

/// Graph partitioning: swap two nodes with different labels.
///
/// Pairs are rejection-sampled until the labels differ, so group sizes are
/// preserved. Fails when every node carries the same label.
pub fn propose_swap<R: Rng>(x: &[bool], rng: &mut R) -> Result<Move> {
    let ones = x.iter().filter(|&&b| b).count();
    if ones == 0 || ones == x.len() {
        return Err(GraphOptError::EmptyCandidateSet(
            "swap needs nodes on both sides of the partition",
        ));
    }
    loop {
        let a = rng.random_range(0..x.len());
        let b = rng.random_range(0..x.len());
        if x[a] != x[b] {
            return Ok(Move::Swap(a, b));
        }
    }
}

/// Minimum vertex cover: find a selected node whose removal keeps every
/// edge covered.
///
/// Samples selected nodes uniformly, at most `budget` times, and returns the
/// first removable one. Returns `Ok(None)` when the budget runs out; the
/// caller leaves the assignment unchanged for that step.
///
/// `x` must already be a cover. Under that precondition a node is removable
/// iff all of its neighbors are selected, which is equivalent to running
/// [`cover_all_edges`](crate::objective::cover_all_edges) on the moved
/// assignment but costs O(degree).
pub fn propose_removal<R: Rng>(
    x: &[bool],
    graph: &Graph,
    budget: usize,
    rng: &mut R,
) -> Result<Option<Move>> {
    let selected: Vec<usize> = (0..x.len()).filter(|&i| x[i]).collect();
    if selected.is_empty() {
        return Err(GraphOptError::EmptyCandidateSet("no selected node to remove"));
    }

    for _ in 0..budget {
        let node = selected[rng.random_range(0..selected.len())];
        if removal_keeps_cover(x, graph, node) {
            return Ok(Some(Move::Remove(node)));
        }
    }
    Ok(None)
}

/// True iff deselecting `node` leaves all of its incident edges covered.
pub fn removal_keeps_cover(x: &[bool], graph: &Graph, node: usize) -> bool {
    graph.neighbors(node).iter().all(|n| x[n.node])
}

/// Maximum independent set: move one selected node out and one or two
/// unselected nodes in.
///
/// With probability [`P_SINGLE_SWAP`] one node comes in (a swap); otherwise
/// two distinct nodes come in, growing the set by one. Candidates for entry
/// are the nodes unselected *before* the move-out. With a single unselected
/// candidate the two-node branch falls back to the swap.
pub fn propose_exchange<R: Rng>(x: &[bool], rng: &mut R) -> Result<Move> {
    let (selected, unselected): (Vec<usize>, Vec<usize>) = (0..x.len()).partition(|&i| x[i]);
    if selected.is_empty() {
        return Err(GraphOptError::EmptyCandidateSet("no selected node to move out"));
    }
    if unselected.is_empty() {
        return Err(GraphOptError::EmptyCandidateSet("no unselected node to move in"));
    }

    let out = selected[rng.random_range(0..selected.len())];

    if rng.random_range(0.0..1.0) < P_SINGLE_SWAP || unselected.len() < 2 {
        let into = unselected[rng.random_range(0..unselected.len())];
        return Ok(Move::Exchange { out, into });
    }

    loop {
        let a = rng.random_range(0..unselected.len());
        let b = rng.random_range(0..unselected.len());
        if a != b {
            return Ok(Move::ExchangeTwo {
                out,
                into: [unselected[a], unselected[b]],
            });
        }
    }
}
