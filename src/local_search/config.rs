//! Batched local search configuration.

/// Configuration for [`BatchedSearchRunner`](super::BatchedSearchRunner).
///
/// A run is `num_restarts` independent restarts. Each restart draws a
/// random population of `num_slots` assignments and then runs up to
/// `num_rounds` rounds: the population is reset to its best slot,
/// perturbed by `num_perturb` random flips per slot, and improved by up to
/// `num_inner` calls of
/// [`random_search`](super::BatchedLocalSearch::random_search).
///
/// # Examples
///
/// ```
/// use u_graphopt::local_search::BatchedSearchConfig;
///
/// let config = BatchedSearchConfig::default()
///     .with_num_slots(32)
///     .with_num_rounds(16)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchedSearchConfig {
    /// Population size.
    pub num_slots: usize,

    /// Independent restarts from fresh random populations.
    pub num_restarts: usize,

    /// Maximum rounds per restart.
    pub num_rounds: usize,

    /// Rounds without a new best before the restart ends.
    pub round_patience: usize,

    /// Maximum `random_search` calls per round.
    pub num_inner: usize,

    /// Calls without any slot improving before the round ends.
    pub inner_patience: usize,

    /// Random single-node flips applied to each slot at the start of a round.
    pub num_perturb: usize,

    /// Flip rounds per `random_search` call.
    pub num_iters: usize,

    /// Nodes flipped per flip round.
    pub num_spin: usize,

    /// Noise scale relative to the spread of the flip gains.
    pub noise_std: f64,

    /// Process slots on the rayon pool (requires the `parallel` feature).
    pub parallel: bool,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for BatchedSearchConfig {
    fn default() -> Self {
        Self {
            num_slots: 64,
            num_restarts: 1,
            num_rounds: 64,
            round_patience: 8,
            num_inner: 16,
            inner_patience: 1,
            num_perturb: 16,
            num_iters: 64,
            num_spin: 4,
            noise_std: 0.3,
            parallel: false,
            seed: None,
        }
    }
}

impl BatchedSearchConfig {
    pub fn with_num_slots(mut self, n: usize) -> Self {
        self.num_slots = n;
        self
    }

    pub fn with_num_restarts(mut self, n: usize) -> Self {
        self.num_restarts = n;
        self
    }

    pub fn with_num_rounds(mut self, n: usize) -> Self {
        self.num_rounds = n;
        self
    }

    pub fn with_round_patience(mut self, n: usize) -> Self {
        self.round_patience = n;
        self
    }

    pub fn with_num_inner(mut self, n: usize) -> Self {
        self.num_inner = n;
        self
    }

    pub fn with_inner_patience(mut self, n: usize) -> Self {
        self.inner_patience = n;
        self
    }

    pub fn with_num_perturb(mut self, n: usize) -> Self {
        self.num_perturb = n;
        self
    }

    pub fn with_num_iters(mut self, n: usize) -> Self {
        self.num_iters = n;
        self
    }

    pub fn with_num_spin(mut self, n: usize) -> Self {
        self.num_spin = n;
        self
    }

    pub fn with_noise_std(mut self, s: f64) -> Self {
        self.noise_std = s;
        self
    }

    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration. `num_spin` is checked against the
    /// graph when the search starts.
    pub fn validate(&self) -> Result<(), String> {
        if self.num_slots == 0 {
            return Err("num_slots must be positive".into());
        }
        if self.num_restarts == 0 {
            return Err("num_restarts must be positive".into());
        }
        if self.num_rounds == 0 {
            return Err("num_rounds must be positive".into());
        }
        if self.num_inner == 0 {
            return Err("num_inner must be positive".into());
        }
        if self.num_spin == 0 {
            return Err("num_spin must be positive".into());
        }
        if !self.noise_std.is_finite() || self.noise_std < 0.0 {
            return Err(format!(
                "noise_std must be finite and non-negative, got {}",
                self.noise_std
            ));
        }
        Ok(())
    }
}
