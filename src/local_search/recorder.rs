//! Best-so-far bookkeeping.

/// Tracks the best score seen so far and when it improved.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recorder {
    best_solution: Option<Vec<bool>>,
    best_score: f64,
    history: Vec<(usize, f64)>,
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new()
    }
}

impl Recorder {
    pub fn new() -> Self {
        Self {
            best_solution: None,
            best_score: f64::NEG_INFINITY,
            history: Vec::new(),
        }
    }

    /// Offers `(solution, score)` observed at round `round`. Returns `true`
    /// and records it if the score beats every earlier one.
    pub fn record(&mut self, round: usize, solution: &[bool], score: f64) -> bool {
        if self.best_solution.is_some() && score <= self.best_score {
            return false;
        }
        self.best_solution = Some(solution.to_vec());
        self.best_score = score;
        self.history.push((round, score));
        true
    }

    pub fn best(&self) -> Option<(&[bool], f64)> {
        self.best_solution
            .as_deref()
            .map(|x| (x, self.best_score))
    }

    /// `(round, score)` of every improvement, in order.
    pub fn history(&self) -> &[(usize, f64)] {
        &self.history
    }

    pub fn into_parts(self) -> (Option<Vec<bool>>, f64, Vec<(usize, f64)>) {
        (self.best_solution, self.best_score, self.history)
    }
}
