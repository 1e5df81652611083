//! Individuals and their scored form.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A candidate solution: a fixed-length sequence of gene symbols.
///
/// Individuals are never edited in place once scored; the genetic operators
/// return new values. Ordering is lexicographic over the symbols.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub struct Individual {
    genes: Vec<char>,
}

impl Individual {
    /// Create from raw symbols.
    pub fn new(genes: Vec<char>) -> Self {
        Self { genes }
    }

    /// Number of genes.
    #[inline]
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Check if the individual has no genes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Gene symbols as a slice.
    #[inline]
    pub fn genes(&self) -> &[char] {
        &self.genes
    }
}

impl From<&str> for Individual {
    fn from(value: &str) -> Self {
        Self::new(value.chars().collect())
    }
}

impl From<String> for Individual {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<Individual> for String {
    fn from(value: Individual) -> Self {
        value.genes.into_iter().collect()
    }
}

impl FromIterator<char> for Individual {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for gene in &self.genes {
            write!(f, "{gene}")?;
        }
        Ok(())
    }
}

/// An individual paired with its fitness (lower is better).
///
/// The derived ordering is part of the contract: fitness ascending first,
/// then the individual's symbols lexicographically ascending. Generations
/// rely on it for `pop_min`, so equally fit entries always come out
/// smallest-sequence first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ScoredIndividual {
    /// Mismatch count against the target.
    pub fitness: usize,
    /// The scored individual.
    pub individual: Individual,
}

impl ScoredIndividual {
    /// Pair an individual with a precomputed fitness.
    pub fn new(fitness: usize, individual: Individual) -> Self {
        Self {
            fitness,
            individual,
        }
    }
}

impl fmt::Display for ScoredIndividual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.individual, self.fitness)
    }
}
