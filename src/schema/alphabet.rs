//! Gene alphabet: the ordered set of symbols individuals are built from.

use std::collections::HashMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{ConfigError, Individual};

/// Ordered, duplicate-free set of permissible gene symbols.
///
/// Serialized as a plain string (`"ACTG"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub struct GeneAlphabet {
    symbols: Vec<char>,
}

impl GeneAlphabet {
    /// Create an alphabet from symbols in the given order.
    ///
    /// Duplicates are kept here and rejected by [`GeneAlphabet::validate`],
    /// so a deserialized config reports them instead of silently merging.
    pub fn new(symbols: impl Into<Vec<char>>) -> Self {
        Self {
            symbols: symbols.into(),
        }
    }

    /// Nucleotide alphabet `ACTG`.
    pub fn nucleotides() -> Self {
        Self::new(vec!['A', 'C', 'T', 'G'])
    }

    /// Number of symbols.
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// All symbols in order.
    #[inline]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Check if a symbol is part of the alphabet.
    #[inline]
    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Draw one symbol uniformly at random.
    ///
    /// Returns `None` only for an empty alphabet.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<char> {
        if self.symbols.is_empty() {
            return None;
        }
        Some(self.symbols[rng.gen_range(0..self.symbols.len())])
    }

    /// Check the alphabet is usable: non-empty and duplicate-free.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.symbols.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }
        let mut seen: HashMap<char, usize> = HashMap::with_capacity(self.symbols.len());
        for (position, &symbol) in self.symbols.iter().enumerate() {
            if let Some(first) = seen.insert(symbol, position) {
                return Err(ConfigError::DuplicateGene {
                    symbol,
                    first,
                    second: position,
                });
            }
        }
        Ok(())
    }

    /// Check every symbol of `sequence` is drawn from this alphabet.
    pub fn check(&self, sequence: &[char]) -> Result<(), ConfigError> {
        match sequence.iter().position(|s| !self.contains(*s)) {
            Some(position) => Err(ConfigError::UnknownGene {
                symbol: sequence[position],
                position,
            }),
            None => Ok(()),
        }
    }

    /// Parse a string into an individual, rejecting unknown symbols.
    pub fn parse(&self, text: &str) -> Result<Individual, ConfigError> {
        let symbols: Vec<char> = text.chars().collect();
        self.check(&symbols)?;
        Ok(Individual::new(symbols))
    }
}

impl Default for GeneAlphabet {
    fn default() -> Self {
        Self::nucleotides()
    }
}

impl From<String> for GeneAlphabet {
    fn from(value: String) -> Self {
        Self::new(value.chars().collect::<Vec<_>>())
    }
}

impl From<GeneAlphabet> for String {
    fn from(value: GeneAlphabet) -> Self {
        value.symbols.into_iter().collect()
    }
}
