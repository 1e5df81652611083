//! Motif Evo - Generational genetic algorithm for gene sequences.
//!
//! This crate evolves fixed-length symbol sequences ("individuals") toward a
//! target sequence drawn from a biological dataset, using tournament
//! selection, single-point crossover, per-gene mutation and elitism.
//!
//! # Architecture
//!
//! The crate is split into three modules:
//!
//! - `schema`: Configuration, individuals and observable step types
//! - `compute`: The evolution engine (fitness, operators, population, controller)
//! - `dataset`: FASTA input and the sequence suppliers seeding a run
//!
//! # Example
//!
//! ```rust
//! use motif_evo::{EvolutionConfig, EvolutionEngine, MotifPool};
//!
//! let config = EvolutionConfig {
//!     population_size: 6,
//!     elite_carryover: 1,
//!     mutation_probability: 0,
//!     max_generations: 50,
//!     random_seed: Some(3),
//!     ..EvolutionConfig::for_target("ACGT")
//! };
//! let supplier = MotifPool::new(4, ["AAAA", "CCCC", "TTTT", "GGGG", "ACGT", "TGCA"]);
//!
//! let mut engine = EvolutionEngine::new(config, supplier).unwrap();
//! let outcome = engine.run().unwrap();
//! assert!(outcome.found);
//! assert_eq!(outcome.generation, 1);
//! ```

pub mod compute;
pub mod dataset;
pub mod schema;

// Re-export commonly used types
pub use compute::evolution::{EvolutionEngine, EvolutionError, FitnessEvaluator, Generation};
pub use dataset::{MotifPool, RandomSequences, SequenceSupplier};
pub use schema::{EvolutionConfig, GeneAlphabet, Individual, RunOutcome, ScoredIndividual};
