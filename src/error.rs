//! Error taxonomy shared by every module of the crate.

/// Errors raised by graph construction, move generation, the solvers and
/// the solution codec.
///
/// A vertex-cover proposal that exhausts its sampling budget is *not* an
/// error: [`propose_removal`](crate::neighborhood::propose_removal) reports it
/// as `Ok(None)` and the annealer accepts the unchanged state for that step.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GraphOptError {
    /// Malformed input graph, detected at construction.
    #[error("invalid graph: {0}")]
    InvalidGraph(String),

    /// A graph that is well-formed but cannot be searched (no nodes or no edges).
    #[error("degenerate graph: {0}")]
    DegenerateGraph(String),

    /// A move generator was asked to sample from an empty node set.
    #[error("empty candidate set: {0}")]
    EmptyCandidateSet(&'static str),

    /// The codec met a character outside its alphabet.
    #[error("invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },

    /// The decoded value needs more bits than the codec's node count.
    #[error("decoded value does not fit in {num_nodes} nodes")]
    CodecOverflow { num_nodes: usize },

    /// The supplied starting assignment violates a hard constraint.
    #[error("infeasible starting assignment: {0}")]
    InfeasibleStart(String),

    /// An assignment or population has the wrong shape.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// A step was requested after the annealing schedule ended.
    #[error("all {num_steps} annealing steps already ran")]
    StepsExhausted { num_steps: usize },

    /// A solver configuration failed validation.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GraphOptError>;
