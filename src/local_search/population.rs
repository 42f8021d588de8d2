//! Population of candidate assignments improved by weighted random flips.

use crate::error::{GraphOptError, Result};
use crate::graph::Graph;
use crate::problem::GraphProblem;
use rand::Rng;
use rand_distr::StandardNormal;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use u_numflow::random::create_rng;

/// Outcome of one [`BatchedLocalSearch::random_search`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchRound {
    /// Slots whose retained assignment was replaced.
    pub num_updated: usize,
    /// Best retained score after the call.
    pub best_score: f64,
}

/// A uniformly random assignment.
pub fn random_assignment<R: Rng>(num_nodes: usize, rng: &mut R) -> Vec<bool> {
    (0..num_nodes).map(|_| rng.random_bool(0.5)).collect()
}

/// Replaces `(solutions0[i], scores0[i])` with `(solutions1[i], scores1[i])`
/// wherever `scores1[i] > scores0[i]`. Returns the number of replaced slots.
///
/// Slots never exchange information; the rule is a strict-improvement
/// accept, so no retained score ever decreases.
pub fn update_by_objs(
    solutions0: &mut [Vec<bool>],
    scores0: &mut [f64],
    solutions1: &[Vec<bool>],
    scores1: &[f64],
) -> Result<usize> {
    let n = solutions0.len();
    for len in [scores0.len(), solutions1.len(), scores1.len()] {
        if len != n {
            return Err(GraphOptError::DimensionMismatch {
                expected: n,
                got: len,
            });
        }
    }

    let mut updated = 0;
    for i in 0..n {
        if scores1[i] > scores0[i] {
            solutions0[i].clone_from(&solutions1[i]);
            scores0[i] = scores1[i];
            updated += 1;
        }
    }
    Ok(updated)
}

/// Batched stochastic local search over a fixed-size population.
///
/// Every slot holds an `(assignment, score)` pair. A call to
/// [`random_search`](Self::random_search) improves each slot independently
/// and keeps a slot's new assignment only if it scores strictly higher, so
/// per-slot scores are monotone across calls.
///
/// With the `parallel` feature and [`with_parallel`](Self::with_parallel),
/// slots are processed on the rayon thread pool. Each slot draws from its
/// own RNG stream, seeded from the caller's RNG in slot order, so the result
/// is identical either way.
pub struct BatchedLocalSearch<'a, P: GraphProblem> {
    problem: &'a P,
    graph: &'a Graph,
    parallel: bool,
    good_solutions: Vec<Vec<bool>>,
    good_objs: Vec<f64>,
}

impl<'a, P: GraphProblem> BatchedLocalSearch<'a, P> {
    /// Creates an empty search. Call [`reset`](Self::reset) or
    /// [`reset_search`](Self::reset_search) before searching.
    pub fn new(problem: &'a P, graph: &'a Graph) -> Self {
        Self {
            problem,
            graph,
            parallel: false,
            good_solutions: Vec::new(),
            good_objs: Vec::new(),
        }
    }

    /// Processes slots in parallel. Without the `parallel` feature this is
    /// accepted and ignored.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn len(&self) -> usize {
        self.good_solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.good_solutions.is_empty()
    }

    pub fn solutions(&self) -> &[Vec<bool>] {
        &self.good_solutions
    }

    pub fn scores(&self) -> &[f64] {
        &self.good_objs
    }

    /// Highest-scoring slot, first one on ties.
    pub fn best(&self) -> Option<(&[bool], f64)> {
        let mut best: Option<usize> = None;
        for (i, &score) in self.good_objs.iter().enumerate() {
            if best.is_none_or(|b| score > self.good_objs[b]) {
                best = Some(i);
            }
        }
        best.map(|i| (self.good_solutions[i].as_slice(), self.good_objs[i]))
    }

    /// Adopts `solutions` as the population and scores it.
    pub fn reset(&mut self, solutions: Vec<Vec<bool>>) -> Result<&[f64]> {
        let n = self.graph.num_nodes();
        if let Some(bad) = solutions.iter().find(|x| x.len() != n) {
            return Err(GraphOptError::DimensionMismatch {
                expected: n,
                got: bad.len(),
            });
        }
        self.good_objs = solutions
            .iter()
            .map(|x| self.problem.score(x, self.graph))
            .collect();
        self.good_solutions = solutions;
        Ok(&self.good_objs)
    }

    /// Fills `num_slots` slots, each with the best of `samples_per_slot`
    /// random assignments.
    pub fn reset_search<R: Rng>(
        &mut self,
        num_slots: usize,
        samples_per_slot: usize,
        rng: &mut R,
    ) -> Result<&[f64]> {
        let n = self.graph.num_nodes();
        let samples = samples_per_slot.max(1);
        let mut solutions = Vec::with_capacity(num_slots);
        for _ in 0..num_slots {
            let mut best = random_assignment(n, rng);
            let mut best_score = self.problem.score(&best, self.graph);
            for _ in 1..samples {
                let x = random_assignment(n, rng);
                let score = self.problem.score(&x, self.graph);
                if score > best_score {
                    best = x;
                    best_score = score;
                }
            }
            solutions.push(best);
        }
        self.reset(solutions)
    }

    /// Overwrites every slot with the current best one.
    pub fn reset_to_best(&mut self) {
        let Some((solution, score)) = self.best().map(|(x, s)| (x.to_vec(), s)) else {
            return;
        };
        for (x, s) in self.good_solutions.iter_mut().zip(self.good_objs.iter_mut()) {
            x.clone_from(&solution);
            *s = score;
        }
    }

    /// Takes every slot of `other` that scores strictly higher than the
    /// matching slot here. Returns the number of slots taken.
    pub fn absorb(&mut self, other: &Self) -> Result<usize> {
        update_by_objs(
            &mut self.good_solutions,
            &mut self.good_objs,
            &other.good_solutions,
            &other.good_objs,
        )
    }

    /// One call of the weighted random-flip search.
    ///
    /// For each slot, `num_iters` rounds of:
    /// 1. flip gains of the slot's incumbent (the problem's
    ///    [`flip_gains`](GraphProblem::flip_gains));
    /// 2. Gaussian noise scaled by `noise_std` times the spread
    ///    (max - min) of the gains;
    /// 3. flipping every node whose noisy gain exceeds the
    ///    `(n - num_spin)`-th smallest value, a threshold fixed in the first
    ///    round and reused afterwards;
    /// 4. keeping the challenger iff it scores strictly higher.
    ///
    /// Then one sweep tries each single-node flip in index order and keeps
    /// strict improvements. The result replaces the retained slot only if
    /// it is strictly better.
    pub fn random_search<R: Rng>(
        &mut self,
        num_iters: usize,
        num_spin: usize,
        noise_std: f64,
        rng: &mut R,
    ) -> Result<SearchRound> {
        let n = self.graph.num_nodes();
        if num_spin > n {
            return Err(GraphOptError::InvalidConfig(format!(
                "num_spin {num_spin} exceeds node count {n}"
            )));
        }
        if !noise_std.is_finite() || noise_std < 0.0 {
            return Err(GraphOptError::InvalidConfig(format!(
                "noise_std must be finite and non-negative, got {noise_std}"
            )));
        }

        let seeds: Vec<u64> = (0..self.len()).map(|_| rng.random()).collect();
        let slot = |i: usize| {
            search_slot(
                self.problem,
                self.graph,
                &self.good_solutions[i],
                self.good_objs[i],
                num_iters,
                num_spin,
                noise_std,
                seeds[i],
            )
        };

        #[cfg(feature = "parallel")]
        let challengers: Vec<(Vec<bool>, f64)> = if self.parallel {
            (0..self.len()).into_par_iter().map(slot).collect()
        } else {
            (0..self.len()).map(slot).collect()
        };
        #[cfg(not(feature = "parallel"))]
        let challengers: Vec<(Vec<bool>, f64)> = (0..self.len()).map(slot).collect();

        let (solutions, scores): (Vec<Vec<bool>>, Vec<f64>) = challengers.into_iter().unzip();
        let num_updated =
            update_by_objs(&mut self.good_solutions, &mut self.good_objs, &solutions, &scores)?;

        Ok(SearchRound {
            num_updated,
            best_score: self.best().map_or(f64::NEG_INFINITY, |(_, s)| s),
        })
    }
}

/// Runs the flip rounds and the single-bit sweep for one slot.
#[allow(clippy::too_many_arguments)]
fn search_slot<P: GraphProblem>(
    problem: &P,
    graph: &Graph,
    solution: &[bool],
    score: f64,
    num_iters: usize,
    num_spin: usize,
    noise_std: f64,
    seed: u64,
) -> (Vec<bool>, f64) {
    let mut rng = create_rng(seed);
    let n = solution.len();
    let mut current = solution.to_vec();
    let mut current_score = score;

    let mut gains = vec![0.0; n];
    let mut noisy = vec![0.0; n];
    let mut threshold: Option<f64> = None;

    for _ in 0..num_iters {
        problem.flip_gains(&current, graph, &mut gains);
        let (lo, hi) = gains
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &g| (lo.min(g), hi.max(g)));
        let scale = (hi - lo) * noise_std;
        for (v, &g) in noisy.iter_mut().zip(&gains) {
            let z: f64 = rng.sample(StandardNormal);
            *v = g + z * scale;
        }

        let thresh = *threshold.get_or_insert_with(|| kth_smallest(&noisy, n - num_spin));

        let mut challenger = current.clone();
        for (x, &v) in challenger.iter_mut().zip(&noisy) {
            if v > thresh {
                *x = !*x;
            }
        }
        let challenger_score = problem.score(&challenger, graph);
        if challenger_score > current_score {
            current = challenger;
            current_score = challenger_score;
        }
    }

    for i in 0..n {
        current[i] = !current[i];
        let flipped = problem.score(&current, graph);
        if flipped > current_score {
            current_score = flipped;
        } else {
            current[i] = !current[i];
        }
    }

    (current, current_score)
}

/// The `k`-th smallest value (1-based). `k = 0` yields negative infinity,
/// so every value lies above it.
fn kth_smallest(values: &[f64], k: usize) -> f64 {
    if k == 0 {
        return f64::NEG_INFINITY;
    }
    let mut sorted = values.to_vec();
    let (_, kth, _) = sorted.select_nth_unstable_by(k - 1, |a, b| a.total_cmp(b));
    *kth
}
