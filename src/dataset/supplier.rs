//! Sequence suppliers feeding the first generation.

use rand::RngCore;
use rand::seq::SliceRandom;

use crate::schema::{GeneAlphabet, Individual};

use super::fasta::{Dataset, DatasetError};

/// Source of candidate individuals of a requested length.
///
/// The engine only asks for sequences while seeding a run; how they are
/// produced (dataset motifs, uniform noise, fixed lists) is up to the
/// implementation.
pub trait SequenceSupplier {
    /// Produce one candidate of exactly `length` symbols.
    fn sample(&mut self, length: usize, rng: &mut dyn RngCore) -> Result<Individual, SupplyError>;
}

impl<T: SequenceSupplier + ?Sized> SequenceSupplier for &mut T {
    fn sample(&mut self, length: usize, rng: &mut dyn RngCore) -> Result<Individual, SupplyError> {
        (**self).sample(length, rng)
    }
}

impl<T: SequenceSupplier + ?Sized> SequenceSupplier for Box<T> {
    fn sample(&mut self, length: usize, rng: &mut dyn RngCore) -> Result<Individual, SupplyError> {
        (**self).sample(length, rng)
    }
}

/// Uniform choice among fixed-length motifs.
#[derive(Debug, Clone)]
pub struct MotifPool {
    motif_length: usize,
    motifs: Vec<Individual>,
}

impl MotifPool {
    /// Build a pool from explicit motifs.
    ///
    /// Motifs whose length differs from `motif_length` are skipped.
    pub fn new<I, S>(motif_length: usize, motifs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let motifs = motifs
            .into_iter()
            .map(|m| Individual::from(m.as_ref()))
            .filter(|m| m.len() == motif_length)
            .collect();
        Self {
            motif_length,
            motifs,
        }
    }

    /// Split a dataset into motifs of `motif_length`.
    pub fn from_dataset(dataset: &Dataset, motif_length: usize) -> Result<Self, DatasetError> {
        let motifs = dataset.split_uniform(motif_length)?;
        log::debug!("Motif pool: {} motifs of length {}", motifs.len(), motif_length);
        Ok(Self::new(motif_length, motifs))
    }

    /// Length of every motif in the pool.
    pub fn motif_length(&self) -> usize {
        self.motif_length
    }

    /// Number of motifs (duplicates included).
    pub fn len(&self) -> usize {
        self.motifs.len()
    }

    /// Check if the pool has no motifs.
    pub fn is_empty(&self) -> bool {
        self.motifs.is_empty()
    }

    /// Drop motifs containing symbols outside `genes` (e.g. `N` runs).
    pub fn retain_alphabet(mut self, genes: &GeneAlphabet) -> Self {
        self.motifs.retain(|m| genes.check(m.genes()).is_ok());
        self
    }

    /// Pick a random motif to use as a run target.
    pub fn choose_target(&self, rng: &mut dyn RngCore) -> Result<Individual, SupplyError> {
        self.motifs.choose(rng).cloned().ok_or(SupplyError::Empty)
    }
}

impl SequenceSupplier for MotifPool {
    fn sample(&mut self, length: usize, rng: &mut dyn RngCore) -> Result<Individual, SupplyError> {
        if length != self.motif_length {
            return Err(SupplyError::LengthUnavailable {
                requested: length,
                available: self.motif_length,
            });
        }
        self.choose_target(rng)
    }
}

/// Independent uniform symbols over an alphabet.
#[derive(Debug, Clone)]
pub struct RandomSequences {
    genes: GeneAlphabet,
}

impl RandomSequences {
    /// Create a supplier over `genes`.
    pub fn new(genes: GeneAlphabet) -> Self {
        Self { genes }
    }
}

impl SequenceSupplier for RandomSequences {
    fn sample(&mut self, length: usize, rng: &mut dyn RngCore) -> Result<Individual, SupplyError> {
        (0..length)
            .map(|_| self.genes.sample(rng).ok_or(SupplyError::EmptyAlphabet))
            .collect::<Result<Vec<char>, _>>()
            .map(Individual::new)
    }
}

/// Sequence supplier errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SupplyError {
    #[error("Supplier has no sequences to offer")]
    Empty,
    #[error("Supplier cannot produce length {requested} (motifs are {available} long)")]
    LengthUnavailable { requested: usize, available: usize },
    #[error("Supplier alphabet is empty")]
    EmptyAlphabet,
}
