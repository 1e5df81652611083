//! Observable evolution types.
//!
//! Everything a rendering or reporting layer may want from a run: the
//! lineage produced by one step, the tournament draws behind it, and the
//! terminal outcome. None of these feed back into the algorithm.

use serde::{Deserialize, Serialize};

use super::ScoredIndividual;

/// Indices sampled by one tournament and the index that won it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentDraw {
    /// Candidate indices into the current generation, in draw order.
    pub sampled: Vec<usize>,
    /// Index of the winning (lowest fitness) candidate.
    pub winner: usize,
}

/// Everything bred in one step, for lineage display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lineage {
    /// Draws that selected each parent.
    pub tournaments: [TournamentDraw; 2],
    /// Selected parents.
    pub parents: [ScoredIndividual; 2],
    /// Shared crossover point for both children.
    pub crossover_point: usize,
    /// Children straight after crossover.
    pub children: [ScoredIndividual; 2],
    /// Children after mutation.
    pub mutated: [ScoredIndividual; 2],
    /// Mutated children actually inserted into the next generation.
    pub inserted: Vec<ScoredIndividual>,
}

/// What a step did.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EvolutionPhase {
    /// Children were bred into the next generation.
    Breeding,
    /// Children were bred and the full next generation became current.
    Advanced,
    /// Termination was detected by this step.
    Terminated,
    /// The run had already stopped; nothing changed.
    Stopped,
}

/// Reason a run stopped.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StopReason {
    /// The target sequence is present in the current or next generation.
    TargetFound,
    /// Generation counter reached the configured maximum.
    MaxGenerations,
}

/// Terminal outcome of a run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunOutcome {
    /// Whether the exact target was present when the run stopped.
    pub found: bool,
    /// Generation counter at the time of stopping.
    pub generation: usize,
    /// Why the run stopped.
    pub reason: StopReason,
}

/// Result of one controller step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepReport {
    /// Generation counter after the step.
    pub generation: usize,
    /// What happened.
    pub phase: EvolutionPhase,
    /// Breeding detail, when children were produced.
    pub lineage: Option<Lineage>,
    /// Size of the next generation after the step.
    pub next_generation_size: usize,
    /// Terminal outcome, once the run has stopped.
    pub outcome: Option<RunOutcome>,
}

/// Aggregate view of one generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationSummary {
    /// Generation counter.
    pub generation: usize,
    /// Best individual, if any.
    pub best: Option<ScoredIndividual>,
    /// Mean fitness (0 for an empty generation).
    pub mean_fitness: f32,
    /// Number of individuals.
    pub size: usize,
}
