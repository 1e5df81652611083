//! Compute module - The generational evolution engine.

pub mod evolution;

pub use evolution::{EvolutionEngine, EvolutionError, Generation};
