//! Generation store: a min-priority queue of scored individuals.

use std::cmp::Reverse;
use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap};

use rand::RngCore;

use crate::dataset::SequenceSupplier;
use crate::schema::{Individual, ScoredIndividual};

use super::error::{EvolutionError, Result};
use super::fitness::FitnessEvaluator;

/// One generation of scored individuals, lowest fitness first.
///
/// Ties on fitness pop in lexicographic sequence order (see
/// [`ScoredIndividual`]). Duplicate sequences may be stored; `contains`
/// tracks multiplicity so removing one copy keeps the others visible.
#[derive(Debug, Clone, Default)]
pub struct Generation {
    heap: BinaryHeap<Reverse<ScoredIndividual>>,
    members: HashMap<Individual, usize>,
}

impl Generation {
    /// Create an empty generation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty generation with room for `capacity` individuals.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            members: HashMap::with_capacity(capacity),
        }
    }

    /// Insert an entry.
    pub fn push(&mut self, scored: ScoredIndividual) {
        *self.members.entry(scored.individual.clone()).or_insert(0) += 1;
        self.heap.push(Reverse(scored));
    }

    /// Remove and return the lowest-fitness entry.
    pub fn pop_min(&mut self) -> Option<ScoredIndividual> {
        let Reverse(scored) = self.heap.pop()?;
        if let Entry::Occupied(mut entry) = self.members.entry(scored.individual.clone()) {
            *entry.get_mut() -= 1;
            if *entry.get() == 0 {
                entry.remove();
            }
        }
        Some(scored)
    }

    /// Lowest-fitness entry without removing it.
    pub fn peek_min(&self) -> Option<&ScoredIndividual> {
        self.heap.peek().map(|Reverse(scored)| scored)
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Check whether an entry with exactly this sequence is stored.
    #[inline]
    pub fn contains(&self, individual: &Individual) -> bool {
        self.members.contains_key(individual)
    }

    /// Entry at a position of the underlying heap layout.
    ///
    /// Positions are stable between mutations, which is all tournament
    /// sampling needs; they carry no ordering meaning.
    pub fn get(&self, index: usize) -> Option<&ScoredIndividual> {
        self.heap.as_slice().get(index).map(|Reverse(scored)| scored)
    }

    /// Entries in heap layout order.
    pub fn iter(&self) -> impl Iterator<Item = &ScoredIndividual> {
        self.heap.iter().map(|Reverse(scored)| scored)
    }

    /// Entries sorted best first, without consuming the generation.
    pub fn ascending(&self) -> Vec<&ScoredIndividual> {
        let mut sorted: Vec<_> = self.iter().collect();
        sorted.sort();
        sorted
    }

    /// Owned copy of the entries sorted best first.
    pub fn snapshot(&self) -> Vec<ScoredIndividual> {
        self.ascending().into_iter().cloned().collect()
    }

    /// Mean fitness, 0 for an empty generation.
    pub fn mean_fitness(&self) -> f32 {
        if self.heap.is_empty() {
            return 0.0;
        }
        self.iter().map(|s| s.fitness as f32).sum::<f32>() / self.heap.len() as f32
    }

    /// Fill a fresh generation with `size` distinct individuals from `supplier`.
    ///
    /// Candidates whose sequence is already present are rejected. At most
    /// `max_attempts` candidates are drawn; running out first is reported
    /// as [`EvolutionError::SupplierExhausted`].
    pub fn seed<S: SequenceSupplier + ?Sized>(
        size: usize,
        evaluator: &FitnessEvaluator,
        supplier: &mut S,
        rng: &mut dyn RngCore,
        max_attempts: usize,
    ) -> Result<Self> {
        let length = evaluator.target().len();
        let mut generation = Self::with_capacity(size);
        let mut attempts = 0;

        while generation.len() < size {
            if attempts >= max_attempts {
                log::warn!(
                    "Seeding gave up after {} draws with {} of {} distinct individuals",
                    attempts,
                    generation.len(),
                    size
                );
                return Err(EvolutionError::SupplierExhausted {
                    requested: size,
                    distinct: generation.len(),
                    attempts,
                });
            }
            attempts += 1;

            let candidate = supplier.sample(length, rng)?;
            if generation.contains(&candidate) {
                continue;
            }
            generation.push(evaluator.score(candidate)?);
        }

        log::debug!(
            "Seeded generation of {} individuals in {} draws",
            size,
            attempts
        );
        Ok(generation)
    }
}
