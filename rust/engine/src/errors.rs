use thiserror::Error;

/// Malformed construction bounds for a [`crate::config::DeckConfiguration`].
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigurationError {
    #[error("deck_size must be >= 1")]
    EmptyDeck,
    #[error("{min_name} ({min}) must not exceed {max_name} ({max})")]
    InvertedBounds {
        min_name: &'static str,
        min: usize,
        max_name: &'static str,
        max: usize,
    },
    #[error("{name} ({value}) must not exceed deck_size ({deck_size})")]
    ExceedsDeck {
        name: &'static str,
        value: usize,
        deck_size: usize,
    },
    #[error("max_hand_size ({value}) exceeds the enumeration limit of {limit}")]
    HandTooLarge { value: usize, limit: usize },
}

/// A query parameter outside the engine's configured bounds.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("{parameter} must be {min}-{max} (got {value})")]
pub struct QueryRangeError {
    pub parameter: &'static str,
    pub value: usize,
    pub min: usize,
    pub max: usize,
}

/// Failures while building a [`crate::engine::ProbabilityEngine`].
///
/// Everything except `Configuration` is a logic defect: the computation is
/// deterministic, so retrying can never succeed.
#[derive(Debug, Error, PartialEq, Clone)]
pub enum EngineError {
    #[error("invalid configuration: {0}")]
    Configuration(#[from] ConfigurationError),
    #[error("probability sum is not 1 for {s} target cards in a hand of {h}: it is {sum}")]
    InvariantViolation { sum: f64, s: usize, h: usize },
    #[error(
        "unreachable draw state consulted (s={s}, successes={successes}, failures={failures})"
    )]
    UnreachableState {
        s: usize,
        successes: usize,
        failures: usize,
    },
}

impl EngineError {
    /// True for defects in the computation itself, as opposed to bad input.
    pub fn is_defect(&self) -> bool {
        !matches!(self, EngineError::Configuration(_))
    }
}
