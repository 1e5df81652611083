//! Motif Evo CLI - Run an evolution session from JSON configuration.

use std::fs;
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::StdRng;

use motif_evo::{
    EvolutionEngine, FitnessEvaluator, MotifPool, RandomSequences, ScoredIndividual,
    SequenceSupplier,
    dataset::DatasetPair,
    schema::{EvolutionPhase, SessionConfig},
};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <session.json>", args[0]);
        eprintln!();
        eprintln!("Evolve a gene sequence toward a target motif.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  session.json  Path to session configuration file");
        eprintln!();
        eprintln!("Example configuration is printed with --example flag.");
        std::process::exit(1);
    }

    if args[1] == "--example" {
        print_example_config();
        return;
    }

    let session_path = PathBuf::from(&args[1]);
    let session_str = fs::read_to_string(&session_path).unwrap_or_else(|e| {
        eprintln!("Error reading session file: {}", e);
        std::process::exit(1);
    });
    let mut session: SessionConfig = serde_json::from_str(&session_str).unwrap_or_else(|e| {
        eprintln!("Error parsing session: {}", e);
        std::process::exit(1);
    });

    let supplier = build_supplier(&mut session).unwrap_or_else(|e| {
        eprintln!("Error preparing dataset: {}", e);
        std::process::exit(1);
    });

    let config = session.evolution.clone();
    let mut engine = EvolutionEngine::new(config, supplier).unwrap_or_else(|e| {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    });

    println!("Motif Evolution");
    println!("===============");
    println!("Target: {}", engine.evaluator().target());
    println!("Genes: {}", engine.config().genes.symbols().iter().collect::<String>());
    println!("Population: {}", engine.config().population_size);
    println!("Max generations: {}", engine.config().max_generations);
    println!("Elite carryover: {}", engine.config().elite_carryover);
    println!("Mutation probability: {}%", engine.config().mutation_probability);
    println!();

    if let Err(e) = engine.start() {
        eprintln!("Error starting run: {}", e);
        std::process::exit(1);
    }

    let delay = Duration::from_millis(session.step_delay_ms);
    let start = Instant::now();
    let mut steps: u64 = 0;

    let outcome = loop {
        if session.max_steps.is_some_and(|max| steps >= max) {
            break None;
        }

        let report = engine.step().unwrap_or_else(|e| {
            eprintln!("Error during step {}: {}", steps + 1, e);
            std::process::exit(1);
        });
        steps += 1;

        if report.phase == EvolutionPhase::Advanced
            && let Some(summary) = engine.summary()
        {
            let best = summary
                .best
                .map(|b| describe_best(engine.evaluator(), &b))
                .unwrap_or_default();
            println!(
                "  Generation {}: best={}, mean fitness={:.2}",
                summary.generation, best, summary.mean_fitness
            );
        }

        if let Some(outcome) = report.outcome {
            break Some(outcome);
        }

        if !delay.is_zero() {
            thread::sleep(delay);
        }
    };

    let elapsed = start.elapsed();
    println!();
    match outcome {
        Some(outcome) if outcome.found => {
            println!("Target found in {} generations", outcome.generation)
        }
        Some(outcome) => println!(
            "Target not found; stopped at generation {}",
            outcome.generation
        ),
        None => println!("Step limit reached at generation {:?}", engine.generation()),
    }
    println!(
        "Time: {:.2}s ({} steps, {:.1} steps/s)",
        elapsed.as_secs_f32(),
        steps,
        steps as f32 / elapsed.as_secs_f32().max(f32::EPSILON)
    );
}

/// Pick the sequence supplier and, if needed, a target from the dataset.
fn build_supplier(
    session: &mut SessionConfig,
) -> Result<Box<dyn SequenceSupplier>, Box<dyn std::error::Error>> {
    let Some(source) = &session.dataset else {
        return Ok(Box::new(RandomSequences::new(session.evolution.genes.clone())));
    };

    let pair = DatasetPair::load(&source.root, &source.name)?;
    let genes = &session.evolution.genes;
    let population = MotifPool::from_dataset(&pair.population, source.motif_length)?
        .retain_alphabet(genes);

    if session.evolution.target.is_empty() {
        let mut rng = match session.evolution.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let targets =
            MotifPool::from_dataset(&pair.targets, source.motif_length)?.retain_alphabet(genes);
        session.evolution.target = targets.choose_target(&mut rng)?.to_string();
    }

    Ok(Box::new(population))
}

/// Best individual with its similarity to the target.
fn describe_best(evaluator: &FitnessEvaluator, best: &ScoredIndividual) -> String {
    evaluator.similarity_percent(&best.individual).map_or_else(
        |e| format!("{} [{}]", best, e),
        |similarity| format!("{} ({:.2}%)", best, similarity),
    )
}

fn print_example_config() {
    let session = SessionConfig::example();
    println!("Example configuration (session.json):");
    println!(
        "{}",
        serde_json::to_string_pretty(&session).unwrap_or_default()
    );
}
