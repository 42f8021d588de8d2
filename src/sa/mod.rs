//! Simulated Annealing (SA) over graph assignments.
//!
//! A single-trajectory search seeded from an externally supplied
//! `(solution, score)`. Each step proposes a problem-specific move on a copy
//! of the current assignment and accepts it by the Metropolis rule under a
//! linearly decreasing temperature.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast Computing Machines"

mod config;
mod runner;
mod types;

pub use config::AnnealingConfig;
pub use runner::{Annealer, AnnealingResult, AnnealingRunner};
pub use types::{
    acceptance_probability, linear_temperature, metropolis_accept, StepOutcome,
    TEMPERATURE_EPSILON,
};
