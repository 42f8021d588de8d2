//! Weighted graph model.
//!
//! A [`Graph`] is built once per run from a validated edge list and then
//! shared read-only by the objective functions, the move generators and
//! both solvers.

pub mod generate;
mod model;

pub use model::{Edge, Graph, Neighbor};
