//! Configuration types for evolution run parameters.

use serde::{Deserialize, Serialize};

use super::{GeneAlphabet, Individual};

fn default_population_size() -> usize {
    10
}
fn default_max_generations() -> usize {
    1000
}
fn default_elite_carryover() -> usize {
    1
}
fn default_mutation_probability() -> u8 {
    5
}
fn default_max_sampling_attempts() -> usize {
    10_000
}

/// Run parameters for one evolution run.
///
/// Fixed while a run is in progress; replaced between runs through
/// `EvolutionEngine::update_config`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionConfig {
    /// Permissible gene symbols.
    #[serde(default)]
    pub genes: GeneAlphabet,
    /// Target sequence individuals converge toward.
    /// Empty means "pick one from the dataset" (CLI only).
    #[serde(default)]
    pub target: String,
    /// Individuals per generation (>= 2).
    #[serde(default = "default_population_size")]
    pub population_size: usize,
    /// Generation counter value at which the run stops (>= 1).
    #[serde(default = "default_max_generations")]
    pub max_generations: usize,
    /// Best individuals copied unchanged into the next generation.
    #[serde(default = "default_elite_carryover")]
    pub elite_carryover: usize,
    /// Per-gene mutation chance in percent (0-100).
    #[serde(default = "default_mutation_probability")]
    pub mutation_probability: u8,
    /// Upper bound on supplier draws while seeding the first generation.
    #[serde(default = "default_max_sampling_attempts")]
    pub max_sampling_attempts: usize,
    /// Random seed for reproducibility.
    #[serde(default)]
    pub random_seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            genes: GeneAlphabet::default(),
            target: String::new(),
            population_size: default_population_size(),
            max_generations: default_max_generations(),
            elite_carryover: default_elite_carryover(),
            mutation_probability: default_mutation_probability(),
            max_sampling_attempts: default_max_sampling_attempts(),
            random_seed: None,
        }
    }
}

impl EvolutionConfig {
    /// Config for a given target with default parameters.
    pub fn for_target(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            ..Default::default()
        }
    }

    /// Number of candidates drawn per tournament.
    ///
    /// A third of the population, never less than one.
    #[inline]
    pub fn tournament_size(&self) -> usize {
        (self.population_size / 3).max(1)
    }

    /// Parse the target against the alphabet.
    pub fn target_individual(&self) -> Result<Individual, ConfigError> {
        self.genes.parse(&self.target)
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.genes.validate()?;

        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        if self.max_generations == 0 {
            return Err(ConfigError::InvalidMaxGenerations);
        }
        if self.elite_carryover >= self.population_size {
            return Err(ConfigError::EliteCarryoverTooLarge {
                elite: self.elite_carryover,
                population: self.population_size,
            });
        }
        if self.mutation_probability > 100 {
            return Err(ConfigError::MutationProbabilityOutOfRange(
                self.mutation_probability,
            ));
        }
        if self.max_sampling_attempts < self.population_size {
            return Err(ConfigError::SamplingBudgetTooSmall {
                attempts: self.max_sampling_attempts,
                population: self.population_size,
            });
        }

        let target = self.target_individual()?;
        if target.len() < 2 {
            return Err(ConfigError::TargetTooShort(target.len()));
        }

        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Gene alphabet must contain at least one symbol")]
    EmptyAlphabet,
    #[error("Gene '{symbol}' appears twice in the alphabet (positions {first} and {second})")]
    DuplicateGene {
        symbol: char,
        first: usize,
        second: usize,
    },
    #[error("Population size must be at least 2, got {0}")]
    PopulationTooSmall(usize),
    #[error("Maximum generation count must be at least 1")]
    InvalidMaxGenerations,
    #[error("Elite carryover {elite} must be smaller than population size {population}")]
    EliteCarryoverTooLarge { elite: usize, population: usize },
    #[error("Mutation probability must be within 0-100 percent, got {0}")]
    MutationProbabilityOutOfRange(u8),
    #[error("Sampling budget {attempts} cannot fill a population of {population}")]
    SamplingBudgetTooSmall { attempts: usize, population: usize },
    #[error("Target must have at least 2 genes to allow crossover, got {0}")]
    TargetTooShort(usize),
    #[error("Unknown gene '{symbol}' at position {position}")]
    UnknownGene { symbol: char, position: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> EvolutionConfig {
        EvolutionConfig::for_target("ACGTACGT")
    }

    #[test]
    fn test_default_with_target_valid() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_default_without_target_invalid() {
        assert_eq!(
            EvolutionConfig::default().validate(),
            Err(ConfigError::TargetTooShort(0))
        );
    }

    #[test]
    fn test_population_too_small() {
        let config = EvolutionConfig {
            population_size: 1,
            elite_carryover: 0,
            ..valid()
        };
        assert_eq!(config.validate(), Err(ConfigError::PopulationTooSmall(1)));
    }

    #[test]
    fn test_elite_carryover_bound() {
        let config = EvolutionConfig {
            population_size: 4,
            elite_carryover: 4,
            ..valid()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::EliteCarryoverTooLarge {
                elite: 4,
                population: 4
            })
        );
    }

    #[test]
    fn test_mutation_probability_not_clamped() {
        let config = EvolutionConfig {
            mutation_probability: 101,
            ..valid()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::MutationProbabilityOutOfRange(101))
        );

        let config = EvolutionConfig {
            mutation_probability: 100,
            ..valid()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_target_outside_alphabet() {
        let config = EvolutionConfig::for_target("ACGU");
        assert_eq!(
            config.validate(),
            Err(ConfigError::UnknownGene {
                symbol: 'U',
                position: 3
            })
        );
    }

    #[test]
    fn test_max_generations_zero() {
        let config = EvolutionConfig {
            max_generations: 0,
            ..valid()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidMaxGenerations));
    }

    #[test]
    fn test_tournament_size() {
        let mut config = valid();
        config.population_size = 10;
        assert_eq!(config.tournament_size(), 3);
        config.population_size = 2;
        assert_eq!(config.tournament_size(), 1);
    }

    #[test]
    fn test_serialization_defaults() {
        let config: EvolutionConfig = serde_json::from_str(r#"{"target": "ACGT"}"#).unwrap();
        assert_eq!(config.population_size, 10);
        assert_eq!(config.max_generations, 1000);
        assert_eq!(config.elite_carryover, 1);
        assert_eq!(config.mutation_probability, 5);
        assert_eq!(config.genes, GeneAlphabet::nucleotides());
        assert!(config.validate().is_ok());
    }
}
