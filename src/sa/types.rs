//! Temperature schedule and Metropolis acceptance.

use rand::Rng;

/// Added to the temperature in the acceptance exponent so that `T = 0`
/// does not divide by zero.
pub const TEMPERATURE_EPSILON: f64 = 1e-6;

/// Linear schedule: `T(k) = initial * (1 - (k + 1) / num_steps)`.
pub fn linear_temperature(initial: f64, step: usize, num_steps: usize) -> f64 {
    initial * (1.0 - (step + 1) as f64 / num_steps as f64)
}

/// Probability of accepting a move with `delta = current - candidate`.
///
/// Improvements (`delta < 0`) are always accepted; otherwise the
/// probability is `exp(-delta / (T + 1e-6))`.
pub fn acceptance_probability(delta: f64, temperature: f64) -> f64 {
    if delta < 0.0 {
        1.0
    } else {
        (-delta / (temperature + TEMPERATURE_EPSILON)).exp()
    }
}

/// Metropolis criterion. Draws one uniform number only when the move is
/// not an improvement.
pub fn metropolis_accept<R: Rng>(delta: f64, temperature: f64, rng: &mut R) -> bool {
    if delta < 0.0 {
        return true;
    }
    rng.random_range(0.0..1.0) < acceptance_probability(delta, temperature)
}

/// What happened in one annealing step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The candidate replaced the current state.
    Accepted { improving: bool },
    /// The candidate was discarded.
    Rejected,
    /// The generator produced no move; the unchanged state was accepted as a
    /// zero-delta candidate.
    Idle,
}
