//! End-to-end scenarios for the evolution engine.

use motif_evo::compute::evolution::{EngineState, EvolutionError};
use motif_evo::schema::{EvolutionPhase, StopReason};
use motif_evo::{
    EvolutionConfig, EvolutionEngine, FitnessEvaluator, GeneAlphabet, Individual, MotifPool,
    RandomSequences,
};

const SEED_POPULATION: [&str; 6] = ["AAAA", "CCCC", "TTTT", "GGGG", "ACGT", "TGCA"];

fn scenario_config() -> EvolutionConfig {
    EvolutionConfig {
        genes: GeneAlphabet::from("ACTG".to_string()),
        population_size: 6,
        elite_carryover: 1,
        mutation_probability: 0,
        max_generations: 50,
        random_seed: Some(2024),
        ..EvolutionConfig::for_target("ACGT")
    }
}

#[test]
fn test_seed_fitness_matches_definition() {
    let evaluator = FitnessEvaluator::new(Individual::from("ACGT"));
    let fitness: Vec<usize> = SEED_POPULATION
        .iter()
        .map(|s| evaluator.fitness(&Individual::from(*s)).unwrap())
        .collect();
    // Each homopolymer shares exactly one position with ACGT.
    assert_eq!(fitness, vec![3, 3, 3, 3, 0, 4]);
}

#[test]
fn test_target_present_in_first_generation() {
    let supplier = MotifPool::new(4, SEED_POPULATION);
    let mut engine = EvolutionEngine::new(scenario_config(), supplier).unwrap();

    engine.start().unwrap();
    let current = engine.current_generation().unwrap();
    for seq in SEED_POPULATION {
        assert!(current.contains(&Individual::from(seq)));
    }

    let report = engine.step().unwrap();
    let outcome = report.outcome.expect("run should stop immediately");
    assert!(outcome.found);
    assert_eq!(outcome.generation, 1);
    assert_eq!(outcome.reason, StopReason::TargetFound);
    assert!(matches!(engine.state(), EngineState::Stopped { .. }));
}

#[test]
fn test_stops_exactly_at_max_generations() {
    // Position 0 is never 'A', so with mutation off "AAAA" is unreachable.
    let supplier = MotifPool::new(4, ["CCCC", "GGGG", "TTTT", "CACA", "GAGA", "TATA"]);
    let config = EvolutionConfig {
        target: "AAAA".to_string(),
        max_generations: 5,
        ..scenario_config()
    };
    let mut engine = EvolutionEngine::new(config, supplier).unwrap();
    engine.start().unwrap();

    let mut last_generation = 1;
    let outcome = loop {
        let report = engine.step().unwrap();
        if let Some(outcome) = report.outcome {
            break outcome;
        }
        assert!(report.generation <= 5);
        assert!(report.generation >= last_generation);
        last_generation = report.generation;
    };

    assert!(!outcome.found);
    assert_eq!(outcome.generation, 5);
    assert_eq!(outcome.reason, StopReason::MaxGenerations);
    assert_eq!(last_generation, 5);
}

#[test]
fn test_duplicate_rejection_reports_exhaustion() {
    let supplier = MotifPool::new(4, ["ACGA", "TTTT"]);
    let config = EvolutionConfig {
        population_size: 3,
        max_sampling_attempts: 1_000,
        ..scenario_config()
    };
    let mut engine = EvolutionEngine::new(config, supplier).unwrap();

    match engine.start() {
        Err(EvolutionError::SupplierExhausted {
            requested,
            distinct,
            attempts,
        }) => {
            assert_eq!(requested, 3);
            assert_eq!(distinct, 2);
            assert_eq!(attempts, 1_000);
        }
        other => panic!("expected exhaustion, got {:?}", other.map(|_| ())),
    }
    assert!(matches!(engine.state(), EngineState::Idle));
}

#[test]
fn test_population_bounded_after_every_step() {
    let config = EvolutionConfig {
        population_size: 9,
        elite_carryover: 2,
        mutation_probability: 10,
        max_generations: 30,
        random_seed: Some(5),
        ..EvolutionConfig::for_target("ACGTACGTAC")
    };
    let mut engine =
        EvolutionEngine::new(config, RandomSequences::new(GeneAlphabet::nucleotides())).unwrap();
    engine.start().unwrap();

    loop {
        let report = engine.step().unwrap();
        assert!(engine.current_generation().unwrap().len() <= 9);
        assert!(engine.next_generation().unwrap().len() <= 9);
        if report.phase == EvolutionPhase::Advanced {
            assert_eq!(engine.current_generation().unwrap().len(), 9);
        }
        if report.outcome.is_some() {
            break;
        }
    }
}

#[test]
fn test_elites_are_best_of_current_generation() {
    let config = EvolutionConfig {
        population_size: 8,
        elite_carryover: 3,
        mutation_probability: 20,
        max_generations: 10,
        random_seed: Some(11),
        ..EvolutionConfig::for_target("ACGTACGT")
    };
    let mut engine =
        EvolutionEngine::new(config, RandomSequences::new(GeneAlphabet::nucleotides())).unwrap();
    engine.start().unwrap();

    for _ in 0..40 {
        let current = engine.current_generation().unwrap();
        let next = engine.next_generation().unwrap();
        // Elites are the only entries in `next` right after a cycle begins.
        if next.len() <= 3 {
            let worst_elite = next.ascending().last().map(|s| s.fitness).unwrap_or(0);
            let elite_seqs: Vec<_> = next.iter().map(|s| s.individual.clone()).collect();
            for scored in current.iter() {
                if !elite_seqs.contains(&scored.individual) {
                    assert!(worst_elite <= scored.fitness);
                }
            }
        }
        if engine.step().unwrap().outcome.is_some() {
            break;
        }
    }
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let config = EvolutionConfig {
        population_size: 10,
        mutation_probability: 5,
        max_generations: 25,
        random_seed: Some(99),
        ..EvolutionConfig::for_target("ACGTTGCAACGT")
    };
    let run = |config: EvolutionConfig| {
        let mut engine =
            EvolutionEngine::new(config, RandomSequences::new(GeneAlphabet::nucleotides()))
                .unwrap();
        let outcome = engine.run().unwrap();
        (outcome, engine.current_generation().unwrap().snapshot())
    };

    assert_eq!(run(config.clone()), run(config));
}

#[test]
fn test_restart_after_stop() {
    let supplier = MotifPool::new(4, SEED_POPULATION);
    let mut engine = EvolutionEngine::new(scenario_config(), supplier).unwrap();

    engine.start().unwrap();
    engine.stop();
    assert!(matches!(engine.state(), EngineState::Idle));
    assert!(engine.current_generation().is_none());

    let outcome = engine.run().unwrap();
    assert!(outcome.found);
    assert_eq!(engine.runs(), 2);
}
