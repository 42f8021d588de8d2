//! Restart/round driver around [`BatchedLocalSearch`].

use super::config::BatchedSearchConfig;
use super::population::{random_assignment, BatchedLocalSearch};
use super::recorder::Recorder;
use crate::codec::SolutionCodec;
use crate::error::{GraphOptError, Result};
use crate::graph::Graph;
use crate::problem::GraphProblem;
use rand::Rng;
use tracing::{debug, info};
use u_numflow::random::create_rng;

/// Result of a batched local search run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchedSearchResult {
    /// Best assignment found over all restarts.
    pub solution: Vec<bool>,

    /// Score of `solution`.
    pub score: f64,

    /// `(round, score)` at every new best. Rounds are counted across
    /// restarts.
    pub history: Vec<(usize, f64)>,

    /// Rounds executed over all restarts.
    pub rounds: usize,

    /// Total `random_search` calls.
    pub searches: usize,
}

/// Runs [`BatchedLocalSearch`] with restarts, perturbation and patience.
pub struct BatchedSearchRunner;

impl BatchedSearchRunner {
    /// Runs with an RNG seeded from `config.seed` (random if unset).
    pub fn run<P: GraphProblem>(
        problem: &P,
        graph: &Graph,
        config: &BatchedSearchConfig,
    ) -> Result<BatchedSearchResult> {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::run_with_rng(problem, graph, config, &mut rng)
    }

    /// Runs with an injected random source.
    pub fn run_with_rng<P: GraphProblem, R: Rng>(
        problem: &P,
        graph: &Graph,
        config: &BatchedSearchConfig,
        rng: &mut R,
    ) -> Result<BatchedSearchResult> {
        config.validate().map_err(GraphOptError::InvalidConfig)?;
        let n = graph.num_nodes();
        if n == 0 || graph.num_edges() == 0 {
            return Err(GraphOptError::DegenerateGraph(format!(
                "{} nodes, {} edges",
                n,
                graph.num_edges()
            )));
        }
        if config.num_spin > n {
            return Err(GraphOptError::InvalidConfig(format!(
                "num_spin {} exceeds node count {n}",
                config.num_spin
            )));
        }

        debug!(
            problem = problem.name(),
            num_nodes = n,
            num_slots = config.num_slots,
            num_restarts = config.num_restarts,
            "batched local search started"
        );

        let codec = SolutionCodec::new(n);
        let mut recorder = Recorder::new();
        let mut rounds = 0;
        let mut searches = 0;

        for restart in 0..config.num_restarts {
            let mut best = BatchedLocalSearch::new(problem, graph);
            let population = (0..config.num_slots)
                .map(|_| random_assignment(n, rng))
                .collect();
            best.reset(population)?;
            let mut search = BatchedLocalSearch::new(problem, graph).with_parallel(config.parallel);

            let mut last_improved = 0;
            for round in 0..config.num_rounds {
                best.reset_to_best();
                let mut perturbed = best.solutions().to_vec();
                for x in &mut perturbed {
                    for _ in 0..config.num_perturb {
                        let i = rng.random_range(0..n);
                        x[i] = !x[i];
                    }
                }
                search.reset(perturbed)?;

                let mut last_updated = 0;
                for inner in 0..config.num_inner {
                    search.random_search(
                        config.num_iters,
                        config.num_spin,
                        config.noise_std,
                        rng,
                    )?;
                    searches += 1;
                    if best.absorb(&search)? > 0 {
                        last_updated = inner;
                    } else if inner - last_updated > config.inner_patience {
                        break;
                    }
                }

                if let Some((x, score)) = best.best() {
                    if recorder.record(rounds, x, score) {
                        info!(
                            restart,
                            round,
                            score,
                            solution = %codec.encode(x),
                            "new best"
                        );
                        last_improved = round;
                    } else if round - last_improved > config.round_patience {
                        rounds += 1;
                        break;
                    }
                }
                rounds += 1;
            }
            debug!(restart, rounds, best = ?recorder.best().map(|(_, s)| s), "restart finished");
        }

        let (solution, score, history) = recorder.into_parts();
        let solution = solution.ok_or_else(|| {
            GraphOptError::InvalidConfig("search produced no solution".into())
        })?;
        debug!(score, rounds, searches, "batched local search finished");

        Ok(BatchedSearchResult {
            solution,
            score,
            history,
            rounds,
            searches,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::generate::erdos_renyi;
    use crate::objective::{cover_all_edges, is_independent_set, maxcut, selected_count};
    use crate::problem::{MaxCut, MaximumIndependentSet, MinimumVertexCover, ProblemKind};

    fn small_config() -> BatchedSearchConfig {
        BatchedSearchConfig::default()
            .with_num_slots(8)
            .with_num_rounds(8)
            .with_num_inner(4)
            .with_num_iters(8)
            .with_num_perturb(3)
            .with_seed(42)
    }

    #[test]
    fn test_maxcut_beats_random() {
        let mut rng = create_rng(1);
        let g = erdos_renyi(40, 0.15, &mut rng).unwrap();
        let result = BatchedSearchRunner::run(&MaxCut, &g, &small_config()).unwrap();

        assert_eq!(result.score, maxcut(&result.solution, &g));
        // a uniformly random cut expects half the weight
        assert!(result.score >= g.total_weight() / 2.0);
        assert!(result.rounds > 0);
        assert!(result.searches >= result.rounds);
    }

    #[test]
    fn test_history_strictly_increasing() {
        let mut rng = create_rng(2);
        let g = erdos_renyi(30, 0.2, &mut rng).unwrap();
        let config = small_config().with_num_restarts(2);
        let result = BatchedSearchRunner::run(&MaxCut, &g, &config).unwrap();

        assert!(!result.history.is_empty());
        for w in result.history.windows(2) {
            assert!(w[1].0 > w[0].0);
            assert!(w[1].1 > w[0].1);
        }
        assert_eq!(result.history.last().map(|&(_, s)| s), Some(result.score));
    }

    #[test]
    fn test_independent_set_on_path() {
        // path 0-1-2-3-4: the unique maximum independent set is {0, 2, 4}
        let g = Graph::new(5, vec![(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0), (3, 4, 1.0)]).unwrap();
        let config = small_config().with_num_slots(32).with_num_spin(1);
        let result =
            BatchedSearchRunner::run(&MaximumIndependentSet::default(), &g, &config).unwrap();

        assert!(is_independent_set(&result.solution, &g));
        assert_eq!(selected_count(&result.solution), 3);
        assert_eq!(result.solution, vec![true, false, true, false, true]);
    }

    #[test]
    fn test_vertex_cover_on_star() {
        let g = Graph::new(6, (1..6).map(|leaf| (0, leaf, 1.0))).unwrap();
        let config = small_config().with_num_slots(32).with_num_spin(2);
        let result = BatchedSearchRunner::run(&MinimumVertexCover::default(), &g, &config).unwrap();

        assert!(cover_all_edges(&result.solution, &g));
        assert_eq!(selected_count(&result.solution), 1);
        assert!(result.solution[0]);
    }

    #[test]
    fn test_seed_reproducible() {
        let mut rng = create_rng(3);
        let g = erdos_renyi(25, 0.2, &mut rng).unwrap();
        let a = BatchedSearchRunner::run(&ProblemKind::MaxCut, &g, &small_config()).unwrap();
        let b = BatchedSearchRunner::run(&ProblemKind::MaxCut, &g, &small_config()).unwrap();
        assert_eq!(a.solution, b.solution);
        assert_eq!(a.history, b.history);
    }

    #[test]
    fn test_degenerate_graph() {
        let g = Graph::new(3, Vec::new()).unwrap();
        assert!(matches!(
            BatchedSearchRunner::run(&MaxCut, &g, &small_config()),
            Err(GraphOptError::DegenerateGraph(_))
        ));
    }

    #[test]
    fn test_num_spin_exceeds_nodes() {
        let g = Graph::new(2, vec![(0, 1, 1.0)]).unwrap();
        assert!(matches!(
            BatchedSearchRunner::run(&MaxCut, &g, &small_config()),
            Err(GraphOptError::InvalidConfig(_))
        ));
    }
}
