//! Error type for the evolution engine.

use crate::dataset::SupplyError;
use crate::schema::ConfigError;

/// Errors raised by the evolution engine and its operators.
///
/// Every variant is a precondition or configuration failure; none is
/// transient and nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum EvolutionError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Sequence length mismatch: expected {expected}, got {found}")]
    LengthMismatch { expected: usize, found: usize },
    #[error("Crossover point {point} outside 1..{length}")]
    InvalidCrossoverPoint { point: usize, length: usize },
    #[error("Mutation probability must be within 0-100 percent, got {0}")]
    InvalidMutationProbability(u8),
    #[error("Gene alphabet is empty")]
    EmptyAlphabet,
    #[error(
        "Sequence supplier exhausted: {distinct} of {requested} distinct individuals after {attempts} draws"
    )]
    SupplierExhausted {
        requested: usize,
        distinct: usize,
        attempts: usize,
    },
    #[error("Sequence supplier failed: {0}")]
    Supplier(#[from] SupplyError),
    #[error("Cannot select from an empty generation")]
    EmptyGeneration,
    #[error("A run is already in progress")]
    AlreadyRunning,
    #[error("No run in progress")]
    NotRunning,
    #[error("Configuration cannot change while a run is in progress")]
    Busy,
}

/// Result alias for evolution operations.
pub type Result<T> = std::result::Result<T, EvolutionError>;
