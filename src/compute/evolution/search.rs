//! Step-driven evolution controller.
//!
//! The engine never loops on its own: an external driver calls
//! [`EvolutionEngine::step`] on whatever cadence it likes, and each call
//! either breeds one pair of children, advances a full generation, or
//! detects termination.

use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::dataset::SequenceSupplier;
use crate::schema::{
    EvolutionConfig, EvolutionPhase, GenerationSummary, Individual, Lineage, RunOutcome,
    StepReport, StopReason,
};

use super::error::{EvolutionError, Result};
use super::fitness::FitnessEvaluator;
use super::genome::{crossover, mutate, random_crossover_point};
use super::population::Generation;
use super::selection::tournament;

/// All mutable state of one run.
///
/// Owned by the engine and moved through each step, never shared.
#[derive(Debug, Clone)]
pub struct EvolutionState {
    /// Generation counter, starting at 1.
    pub generation: usize,
    /// Generation parents are selected from.
    pub current: Generation,
    /// Generation being filled.
    pub next: Generation,
    known_elites: HashSet<Individual>,
}

impl EvolutionState {
    /// Fresh state for generation 1.
    pub fn new(current: Generation) -> Self {
        Self {
            generation: 1,
            next: Generation::with_capacity(current.len()),
            current,
            known_elites: HashSet::new(),
        }
    }

    /// Copy the best distinct individuals of `current` into `next`.
    ///
    /// Walks `current` best first and stops once `count` distinct elites
    /// have been carried this cycle or `current` runs out. Repeated calls
    /// within one cycle are no-ops. Returns the number carried by this call.
    pub fn carry_elites(&mut self, count: usize) -> usize {
        let mut carried = 0;
        for scored in self.current.ascending() {
            if self.known_elites.len() >= count {
                break;
            }
            if self.known_elites.contains(&scored.individual) {
                continue;
            }
            self.known_elites.insert(scored.individual.clone());
            self.next.push(scored.clone());
            carried += 1;
        }
        carried
    }

    /// Promote `next` to `current` and start a new cycle.
    fn advance_generation(&mut self, elite_carryover: usize) {
        let capacity = self.next.len();
        self.current = std::mem::replace(&mut self.next, Generation::with_capacity(capacity));
        self.generation += 1;
        self.known_elites.clear();
        self.carry_elites(elite_carryover);
    }
}

/// Controller state machine.
#[derive(Debug, Clone, Default)]
pub enum EngineState {
    /// No run in progress.
    #[default]
    Idle,
    /// A run is in progress.
    Running(EvolutionState),
    /// A run finished; final generations stay observable until reset.
    Stopped {
        /// Final run state.
        state: EvolutionState,
        /// How the run ended.
        outcome: RunOutcome,
    },
}

/// Evolution engine driving one run at a time.
pub struct EvolutionEngine<S> {
    config: EvolutionConfig,
    evaluator: FitnessEvaluator,
    supplier: S,
    rng: StdRng,
    state: EngineState,
    runs: usize,
}

impl<S: SequenceSupplier> EvolutionEngine<S> {
    /// Create an idle engine after validating `config`.
    pub fn new(config: EvolutionConfig, supplier: S) -> Result<Self> {
        config.validate()?;
        let evaluator = FitnessEvaluator::new(config.target_individual()?);
        let seed = config.random_seed.unwrap_or_else(rand::random);

        Ok(Self {
            config,
            evaluator,
            supplier,
            rng: StdRng::seed_from_u64(seed),
            state: EngineState::Idle,
            runs: 0,
        })
    }

    /// Replace the configuration between runs.
    ///
    /// A stopped run is discarded. A configured `random_seed` reseeds the
    /// generator so the next run is reproducible.
    pub fn update_config(&mut self, config: EvolutionConfig) -> Result<()> {
        if self.is_running() {
            return Err(EvolutionError::Busy);
        }
        config.validate()?;
        self.evaluator = FitnessEvaluator::new(config.target_individual()?);
        if let Some(seed) = config.random_seed {
            self.rng = StdRng::seed_from_u64(seed);
        }
        self.config = config;
        self.state = EngineState::Idle;
        Ok(())
    }

    /// Replace only the target between runs.
    pub fn set_target(&mut self, target: impl Into<String>) -> Result<()> {
        let config = EvolutionConfig {
            target: target.into(),
            ..self.config.clone()
        };
        self.update_config(config)
    }

    /// Current configuration.
    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    /// Evaluator for the current target.
    pub fn evaluator(&self) -> &FitnessEvaluator {
        &self.evaluator
    }

    /// Controller state.
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Check if a run is in progress.
    pub fn is_running(&self) -> bool {
        matches!(self.state, EngineState::Running(_))
    }

    /// Number of runs started so far.
    pub fn runs(&self) -> usize {
        self.runs
    }

    fn run_state(&self) -> Option<&EvolutionState> {
        match &self.state {
            EngineState::Idle => None,
            EngineState::Running(state) | EngineState::Stopped { state, .. } => Some(state),
        }
    }

    /// Generation counter of the current or last run.
    pub fn generation(&self) -> Option<usize> {
        self.run_state().map(|s| s.generation)
    }

    /// Generation parents are currently selected from.
    pub fn current_generation(&self) -> Option<&Generation> {
        self.run_state().map(|s| &s.current)
    }

    /// Generation being filled.
    pub fn next_generation(&self) -> Option<&Generation> {
        self.run_state().map(|s| &s.next)
    }

    /// Outcome of the last run, once stopped.
    pub fn outcome(&self) -> Option<RunOutcome> {
        match &self.state {
            EngineState::Stopped { outcome, .. } => Some(*outcome),
            _ => None,
        }
    }

    /// Summary of the current generation.
    pub fn summary(&self) -> Option<GenerationSummary> {
        self.run_state().map(|state| GenerationSummary {
            generation: state.generation,
            best: state.current.peek_min().cloned(),
            mean_fitness: state.current.mean_fitness(),
            size: state.current.len(),
        })
    }

    /// Seed generation 1 and begin a run.
    ///
    /// Allowed from Idle or Stopped; a stopped run is discarded.
    pub fn start(&mut self) -> Result<()> {
        if self.is_running() {
            return Err(EvolutionError::AlreadyRunning);
        }
        self.state = EngineState::Idle;

        let current = Generation::seed(
            self.config.population_size,
            &self.evaluator,
            &mut self.supplier,
            &mut self.rng,
            self.config.max_sampling_attempts,
        )?;
        let mut state = EvolutionState::new(current);
        state.carry_elites(self.config.elite_carryover);

        self.runs += 1;
        log::info!(
            "Run {} started: target {} ({} genes), population {}, best fitness {}",
            self.runs,
            self.evaluator.target(),
            self.evaluator.target().len(),
            self.config.population_size,
            state.current.peek_min().map_or(0, |s| s.fitness)
        );
        self.state = EngineState::Running(state);
        Ok(())
    }

    /// Abandon the current or stopped run and return to Idle.
    pub fn stop(&mut self) {
        if !matches!(self.state, EngineState::Idle) {
            log::info!("Run {} reset", self.runs);
        }
        self.state = EngineState::Idle;
    }

    /// Advance the running state machine by one increment.
    ///
    /// On a stopped run this only re-reports the outcome. If a step fails
    /// the run is abandoned and the engine returns to Idle.
    pub fn step(&mut self) -> Result<StepReport> {
        match std::mem::take(&mut self.state) {
            EngineState::Idle => Err(EvolutionError::NotRunning),
            EngineState::Stopped { state, outcome } => {
                let report = StepReport {
                    generation: state.generation,
                    phase: EvolutionPhase::Stopped,
                    lineage: None,
                    next_generation_size: state.next.len(),
                    outcome: Some(outcome),
                };
                self.state = EngineState::Stopped { state, outcome };
                Ok(report)
            }
            EngineState::Running(state) => {
                let (state, report) = self.advance(state).inspect_err(|e| {
                    log::error!("Run {} abandoned: {}", self.runs, e);
                })?;
                self.state = state;
                Ok(report)
            }
        }
    }

    /// Start a run and step it until it stops, reporting every step.
    pub fn run_with_callback<F>(&mut self, mut callback: F) -> Result<RunOutcome>
    where
        F: FnMut(&StepReport),
    {
        self.start()?;
        loop {
            let report = self.step()?;
            callback(&report);
            if let Some(outcome) = report.outcome {
                return Ok(outcome);
            }
        }
    }

    /// Run to completion (blocking).
    pub fn run(&mut self) -> Result<RunOutcome> {
        self.run_with_callback(|_| {})
    }

    /// Termination: target present in either generation, or counter at maximum.
    fn check_termination(&self, state: &EvolutionState) -> Option<RunOutcome> {
        // Only the target scores 0, so it is the best entry wherever present.
        let found = [&state.current, &state.next].into_iter().any(|generation| {
            generation
                .peek_min()
                .is_some_and(|best| self.evaluator.is_target(best))
        });
        if found {
            return Some(RunOutcome {
                found: true,
                generation: state.generation,
                reason: StopReason::TargetFound,
            });
        }
        if state.generation >= self.config.max_generations {
            return Some(RunOutcome {
                found: false,
                generation: state.generation,
                reason: StopReason::MaxGenerations,
            });
        }
        None
    }

    /// One step on a running state, returning the successor state.
    fn advance(&mut self, mut state: EvolutionState) -> Result<(EngineState, StepReport)> {
        if let Some(outcome) = self.check_termination(&state) {
            log::info!(
                "Run {} stopped at generation {}: {:?}",
                self.runs,
                outcome.generation,
                outcome.reason
            );
            let report = StepReport {
                generation: state.generation,
                phase: EvolutionPhase::Terminated,
                lineage: None,
                next_generation_size: state.next.len(),
                outcome: Some(outcome),
            };
            return Ok((EngineState::Stopped { state, outcome }, report));
        }

        let population = self.config.population_size;
        state.carry_elites(self.config.elite_carryover);

        let lineage = if state.next.len() < population {
            Some(self.breed(&mut state)?)
        } else {
            None
        };

        let phase = if state.next.len() >= population {
            state.advance_generation(self.config.elite_carryover);
            log::debug!(
                "Generation {}: best {}",
                state.generation,
                state
                    .current
                    .peek_min()
                    .map_or_else(String::new, |s| s.to_string())
            );
            EvolutionPhase::Advanced
        } else {
            EvolutionPhase::Breeding
        };

        let report = StepReport {
            generation: state.generation,
            phase,
            lineage,
            next_generation_size: state.next.len(),
            outcome: None,
        };
        Ok((EngineState::Running(state), report))
    }

    /// Select, cross, mutate and insert one pair of children.
    fn breed(&mut self, state: &mut EvolutionState) -> Result<Lineage> {
        let size = self.config.tournament_size();
        let first = tournament(&state.current, size, &mut self.rng)?;
        let second = tournament(&state.current, size, &mut self.rng)?;

        let parent_a = state
            .current
            .get(first.winner)
            .cloned()
            .ok_or(EvolutionError::EmptyGeneration)?;
        let parent_b = state
            .current
            .get(second.winner)
            .cloned()
            .ok_or(EvolutionError::EmptyGeneration)?;

        let point = random_crossover_point(self.evaluator.target().len(), &mut self.rng)?;
        let child_a = self
            .evaluator
            .score(crossover(&parent_a.individual, &parent_b.individual, point)?)?;
        let child_b = self
            .evaluator
            .score(crossover(&parent_b.individual, &parent_a.individual, point)?)?;

        let probability = self.config.mutation_probability;
        let genes = &self.config.genes;
        let mutated_a = self.evaluator.score(mutate(
            &child_a.individual,
            probability,
            genes,
            &mut self.rng,
        )?)?;
        let mutated_b = self.evaluator.score(mutate(
            &child_b.individual,
            probability,
            genes,
            &mut self.rng,
        )?)?;

        let remaining = self.config.population_size.saturating_sub(state.next.len());
        let inserted = if remaining == 1 {
            vec![std::cmp::min(&mutated_a, &mutated_b).clone()]
        } else {
            vec![mutated_a.clone(), mutated_b.clone()]
        };
        for scored in &inserted {
            state.next.push(scored.clone());
        }

        log::debug!(
            "Bred {} x {} at {} -> {}",
            parent_a,
            parent_b,
            point,
            inserted
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(Lineage {
            tournaments: [first, second],
            parents: [parent_a, parent_b],
            crossover_point: point,
            children: [child_a, child_b],
            mutated: [mutated_a, mutated_b],
            inserted,
        })
    }
}
