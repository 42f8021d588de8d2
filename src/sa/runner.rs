//! Annealing execution loop.

use super::config::AnnealingConfig;
use super::types::{linear_temperature, metropolis_accept, StepOutcome};
use crate::error::{GraphOptError, Result};
use crate::graph::Graph;
use crate::problem::GraphProblem;
use rand::Rng;
use tracing::{debug, trace};
use u_numflow::random::create_rng;

/// Result of an annealing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealingResult {
    /// Final accepted assignment.
    pub solution: Vec<bool>,

    /// Score of `solution`.
    pub score: f64,

    /// Score the run started from.
    pub initial_score: f64,

    /// The initial score followed by the score of every accepted move,
    /// in order.
    pub trace: Vec<f64>,

    /// Number of steps executed.
    pub steps: usize,

    /// Number of accepted moves (including improvements and idle steps).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Steps in which the generator produced no move. Each one is accepted
    /// with the unchanged score.
    pub idle_steps: usize,

    /// Temperature of the last step.
    pub final_temperature: f64,
}

/// Step-by-step annealing state.
///
/// Created in the initial phase by [`Annealer::new`], which performs every
/// entry check. [`Annealer::step`] advances one step until
/// [`Annealer::is_done`]; [`Annealer::finish`] yields the result.
/// [`AnnealingRunner`] drives the whole cycle.
pub struct Annealer<'a, P: GraphProblem> {
    problem: &'a P,
    graph: &'a Graph,
    initial_temperature: f64,
    num_steps: usize,
    step: usize,
    temperature: f64,
    current: Vec<bool>,
    current_score: f64,
    initial_score: f64,
    trace: Vec<f64>,
    accepted_moves: usize,
    improving_moves: usize,
    idle_steps: usize,
}

impl<'a, P: GraphProblem> Annealer<'a, P> {
    /// Seeds the state from an externally supplied `(solution, score)`.
    ///
    /// # Errors
    /// - [`GraphOptError::InvalidConfig`] for a bad configuration
    /// - [`GraphOptError::DegenerateGraph`] for a graph without nodes or edges
    /// - [`GraphOptError::DimensionMismatch`] if `solution` has the wrong length
    /// - [`GraphOptError::InfeasibleStart`] if the problem rejects the start
    ///   (an incomplete vertex cover)
    pub fn new(
        problem: &'a P,
        graph: &'a Graph,
        solution: Vec<bool>,
        score: f64,
        config: &AnnealingConfig,
    ) -> Result<Self> {
        config.validate().map_err(GraphOptError::InvalidConfig)?;

        if graph.num_nodes() == 0 || graph.num_edges() == 0 {
            return Err(GraphOptError::DegenerateGraph(format!(
                "{} nodes, {} edges",
                graph.num_nodes(),
                graph.num_edges()
            )));
        }
        if solution.len() != graph.num_nodes() {
            return Err(GraphOptError::DimensionMismatch {
                expected: graph.num_nodes(),
                got: solution.len(),
            });
        }
        problem.validate_start(&solution, graph)?;

        let num_steps = config
            .num_steps
            .unwrap_or_else(|| problem.default_num_steps(graph));

        Ok(Self {
            problem,
            graph,
            initial_temperature: config.initial_temperature,
            num_steps,
            step: 0,
            temperature: config.initial_temperature,
            current: solution,
            current_score: score,
            initial_score: score,
            trace: vec![score],
            accepted_moves: 0,
            improving_moves: 0,
            idle_steps: 0,
        })
    }

    pub fn is_done(&self) -> bool {
        self.step >= self.num_steps
    }

    pub fn num_steps(&self) -> usize {
        self.num_steps
    }

    pub fn current(&self) -> (&[bool], f64) {
        (&self.current, self.current_score)
    }

    /// Runs one step: propose on a copy, score it, apply Metropolis.
    ///
    /// On rejection or an idle step the current state is unchanged. An idle
    /// step is still a zero-delta candidate: it is accepted and its score
    /// goes to the trace.
    ///
    /// Fails with [`GraphOptError::StepsExhausted`] once
    /// [`is_done`](Self::is_done) holds.
    pub fn step<R: Rng>(&mut self, rng: &mut R) -> Result<StepOutcome> {
        if self.is_done() {
            return Err(GraphOptError::StepsExhausted {
                num_steps: self.num_steps,
            });
        }
        let k = self.step;
        self.step += 1;
        self.temperature = linear_temperature(self.initial_temperature, k, self.num_steps);

        let Some(mv) = self
            .problem
            .propose(&self.current, self.graph, self.num_steps, rng)?
        else {
            self.idle_steps += 1;
            if metropolis_accept(0.0, self.temperature, rng) {
                self.trace.push(self.current_score);
                self.accepted_moves += 1;
            }
            return Ok(StepOutcome::Idle);
        };

        let mut candidate = self.current.clone();
        mv.apply(&mut candidate);
        let candidate_score = self.problem.score(&candidate, self.graph);

        let delta = self.current_score - candidate_score;
        if !metropolis_accept(delta, self.temperature, rng) {
            return Ok(StepOutcome::Rejected);
        }

        trace!(step = k, ?mv, score = candidate_score, temperature = self.temperature, "accepted");
        let improving = delta < 0.0;
        self.current = candidate;
        self.current_score = candidate_score;
        self.trace.push(candidate_score);
        self.accepted_moves += 1;
        if improving {
            self.improving_moves += 1;
        }
        Ok(StepOutcome::Accepted { improving })
    }

    pub fn finish(self) -> AnnealingResult {
        AnnealingResult {
            solution: self.current,
            score: self.current_score,
            initial_score: self.initial_score,
            trace: self.trace,
            steps: self.step,
            accepted_moves: self.accepted_moves,
            improving_moves: self.improving_moves,
            idle_steps: self.idle_steps,
            final_temperature: self.temperature,
        }
    }
}

/// Executes simulated annealing from a supplied starting point.
pub struct AnnealingRunner;

impl AnnealingRunner {
    /// Runs annealing with an RNG seeded from `config.seed` (random if unset).
    pub fn run<P: GraphProblem>(
        problem: &P,
        graph: &Graph,
        solution: Vec<bool>,
        score: f64,
        config: &AnnealingConfig,
    ) -> Result<AnnealingResult> {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::run_with_rng(problem, graph, solution, score, config, &mut rng)
    }

    /// Runs annealing with an injected random source.
    pub fn run_with_rng<P: GraphProblem, R: Rng>(
        problem: &P,
        graph: &Graph,
        solution: Vec<bool>,
        score: f64,
        config: &AnnealingConfig,
        rng: &mut R,
    ) -> Result<AnnealingResult> {
        let mut annealer = Annealer::new(problem, graph, solution, score, config)?;
        debug!(
            problem = problem.name(),
            num_nodes = graph.num_nodes(),
            num_steps = annealer.num_steps(),
            initial_temperature = config.initial_temperature,
            initial_score = score,
            "simulated annealing started"
        );

        while !annealer.is_done() {
            annealer.step(rng)?;
        }

        let result = annealer.finish();
        debug!(
            initial_score = result.initial_score,
            final_score = result.score,
            accepted = result.accepted_moves,
            idle = result.idle_steps,
            "simulated annealing finished"
        );
        Ok(result)
    }

    /// Scores `solution` with the problem and runs from it.
    pub fn run_from<P: GraphProblem>(
        problem: &P,
        graph: &Graph,
        solution: Vec<bool>,
        config: &AnnealingConfig,
    ) -> Result<AnnealingResult> {
        if solution.len() != graph.num_nodes() {
            return Err(GraphOptError::DimensionMismatch {
                expected: graph.num_nodes(),
                got: solution.len(),
            });
        }
        let score = problem.score(&solution, graph);
        Self::run(problem, graph, solution, score, config)
    }
}
