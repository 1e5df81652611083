//! Generational evolution of gene sequences toward a fixed target.
//!
//! # Overview
//!
//! The evolution system consists of:
//!
//! - **Fitness** (`fitness`): mismatch count against the target (lower is better)
//! - **Genome Operations** (`genome`): single-point crossover and per-gene mutation
//! - **Population** (`population`): min-priority generation store and seeding
//! - **Selection** (`selection`): tournament selection
//! - **Search** (`search`): the step-driven controller tying it together
//!
//! # Example
//!
//! ```rust
//! use motif_evo::compute::evolution::EvolutionEngine;
//! use motif_evo::dataset::RandomSequences;
//! use motif_evo::schema::{EvolutionConfig, GeneAlphabet};
//!
//! let config = EvolutionConfig {
//!     max_generations: 20,
//!     random_seed: Some(1),
//!     ..EvolutionConfig::for_target("ACGTACGT")
//! };
//! let supplier = RandomSequences::new(GeneAlphabet::nucleotides());
//! let mut engine = EvolutionEngine::new(config, supplier).unwrap();
//!
//! engine.start().unwrap();
//! while engine.step().unwrap().outcome.is_none() {}
//! assert!(engine.outcome().is_some());
//! ```

mod error;
mod fitness;
mod genome;
mod population;
mod search;
mod selection;

pub use error::{EvolutionError, Result};
pub use fitness::FitnessEvaluator;
pub use genome::{crossover, mutate, random_crossover_point};
pub use population::Generation;
pub use search::{EngineState, EvolutionEngine, EvolutionState};
pub use selection::tournament;
