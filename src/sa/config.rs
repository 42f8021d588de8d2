//! Annealing configuration.

/// Configuration for [`AnnealingRunner`](super::AnnealingRunner).
///
/// The temperature follows the linear schedule
/// `T(k) = initial_temperature * (1 - (k + 1) / num_steps)`, reaching zero
/// on the last step.
///
/// # Examples
///
/// ```
/// use u_graphopt::sa::AnnealingConfig;
///
/// let config = AnnealingConfig::default()
///     .with_initial_temperature(4.0)
///     .with_num_steps(500)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealingConfig {
    /// Temperature before the first step.
    pub initial_temperature: f64,

    /// Number of steps. `None` uses the problem's default
    /// (see [`GraphProblem::default_num_steps`](crate::problem::GraphProblem::default_num_steps)).
    pub num_steps: Option<usize>,

    /// Random seed for reproducibility. Ignored by `run_with_rng`.
    pub seed: Option<u64>,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 4.0,
            num_steps: None,
            seed: None,
        }
    }
}

impl AnnealingConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_num_steps(mut self, n: usize) -> Self {
        self.num_steps = Some(n);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.initial_temperature.is_finite() || self.initial_temperature < 0.0 {
            return Err(format!(
                "initial_temperature must be finite and non-negative, got {}",
                self.initial_temperature
            ));
        }
        if self.num_steps == Some(0) {
            return Err("num_steps must be positive".into());
        }
        Ok(())
    }
}
