//! Fitness evaluation against a fixed target.
//!
//! Fitness is the number of positions where an individual differs from the
//! target, so lower is better and an exact match scores 0.

use crate::schema::{Individual, ScoredIndividual};

use super::error::{EvolutionError, Result};

/// Scores individuals against one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FitnessEvaluator {
    target: Individual,
}

impl FitnessEvaluator {
    /// Create an evaluator for `target`.
    pub fn new(target: Individual) -> Self {
        Self { target }
    }

    /// The target individual.
    pub fn target(&self) -> &Individual {
        &self.target
    }

    /// Mismatch count between `individual` and the target.
    ///
    /// Fails when the lengths differ.
    pub fn fitness(&self, individual: &Individual) -> Result<usize> {
        if individual.len() != self.target.len() {
            return Err(EvolutionError::LengthMismatch {
                expected: self.target.len(),
                found: individual.len(),
            });
        }
        let matches = individual
            .genes()
            .iter()
            .zip(self.target.genes())
            .filter(|(a, b)| a == b)
            .count();
        Ok(individual.len() - matches)
    }

    /// Score an individual, pairing it with its fitness.
    pub fn score(&self, individual: Individual) -> Result<ScoredIndividual> {
        let fitness = self.fitness(&individual)?;
        Ok(ScoredIndividual::new(fitness, individual))
    }

    /// Check whether `scored` is the exact target.
    #[inline]
    pub fn is_target(&self, scored: &ScoredIndividual) -> bool {
        scored.fitness == 0 && scored.individual == self.target
    }

    /// Share of matching positions in percent, rounded to two decimals.
    pub fn similarity_percent(&self, individual: &Individual) -> Result<f32> {
        let fitness = self.fitness(individual)?;
        if self.target.is_empty() {
            return Ok(100.0);
        }
        let ratio = (self.target.len() - fitness) as f32 / self.target.len() as f32;
        Ok((ratio * 10_000.0).round() / 100.0)
    }
}
