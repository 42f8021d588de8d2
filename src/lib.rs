//! Heuristic solvers for binary assignment problems on weighted graphs.
//!
//! Every node carries one bit, and four problems are scored over that
//! assignment (all maximized):
//!
//! - **Max-Cut**: total weight of edges whose endpoints disagree.
//! - **Graph Partitioning**: cut weight between two labels; moves keep the
//!   two sides balanced.
//! - **Minimum Vertex Cover**: negated cover size; moves never uncover an edge.
//! - **Maximum Independent Set**: set size minus a penalty per conflicting
//!   edge.
//!
//! Two solvers share the graph model and objectives:
//!
//! - **Simulated Annealing** ([`sa`]): one trajectory, problem-specific
//!   moves, Metropolis acceptance under a linear schedule.
//! - **Batched Local Search** ([`local_search`]): a population improved by
//!   noisy gain-weighted flips, optionally in parallel.
//!
//! [`codec`] renders assignments as compact printable text for logs.
//!
//! # Example
//!
//! ```
//! use u_graphopt::graph::Graph;
//! use u_graphopt::problem::{GraphProblem, MaxCut};
//! use u_graphopt::sa::{AnnealingConfig, AnnealingRunner};
//!
//! let graph = Graph::new(4, vec![(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0), (3, 0, 1.0)]).unwrap();
//! let config = AnnealingConfig::default().with_num_steps(200).with_seed(42);
//! let result = AnnealingRunner::run_from(&MaxCut, &graph, vec![false; 4], &config).unwrap();
//! assert_eq!(result.score, MaxCut.score(&result.solution, &graph));
//! ```

pub mod codec;
pub mod error;
pub mod graph;
pub mod local_search;
pub mod neighborhood;
pub mod objective;
pub mod problem;
pub mod sa;

pub use error::{GraphOptError, Result};
