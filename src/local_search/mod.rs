//! Batched stochastic local search.
//!
//! A fixed-size population of assignments is improved in lock-step. Each
//! call of [`BatchedLocalSearch::random_search`] flips, per slot, the nodes
//! whose noise-perturbed flip gain is among the highest, keeps strict
//! improvements only, and finishes with a greedy single-node sweep. Slots
//! never exchange information, so they can run in parallel.
//!
//! [`BatchedSearchRunner`] wraps the population in a restart/round driver:
//! reset to the best slot, perturb, search until no slot improves, and
//! record every new best.

mod config;
mod population;
mod recorder;
mod runner;

pub use config::BatchedSearchConfig;
pub use population::{random_assignment, update_by_objs, BatchedLocalSearch, SearchRound};
pub use recorder::Recorder;
pub use runner::{BatchedSearchResult, BatchedSearchRunner};
