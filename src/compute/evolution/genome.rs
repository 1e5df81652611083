//! Genetic operators over individuals.
//!
//! Single-point crossover and per-gene mutation. Both return new
//! individuals and leave their inputs untouched.

use rand::Rng;

use crate::schema::{GeneAlphabet, Individual};

use super::error::{EvolutionError, Result};

/// Splice `parent_a[..point]` with `parent_b[point..]`.
///
/// Requires equal parent lengths and `0 < point < len`.
pub fn crossover(parent_a: &Individual, parent_b: &Individual, point: usize) -> Result<Individual> {
    let length = parent_a.len();
    if parent_b.len() != length {
        return Err(EvolutionError::LengthMismatch {
            expected: length,
            found: parent_b.len(),
        });
    }
    if point == 0 || point >= length {
        return Err(EvolutionError::InvalidCrossoverPoint { point, length });
    }

    Ok(parent_a.genes()[..point]
        .iter()
        .chain(&parent_b.genes()[point..])
        .copied()
        .collect())
}

/// Draw a crossover point uniformly from `1..length`.
pub fn random_crossover_point<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Result<usize> {
    if length < 2 {
        return Err(EvolutionError::InvalidCrossoverPoint { point: 1, length });
    }
    Ok(rng.gen_range(1..length))
}

/// Replace each gene with a uniformly drawn symbol with `probability` percent chance.
///
/// At 0 the individual comes back unchanged; at 100 every gene is redrawn
/// (a redraw may land on the same symbol).
pub fn mutate<R: Rng + ?Sized>(
    individual: &Individual,
    probability: u8,
    genes: &GeneAlphabet,
    rng: &mut R,
) -> Result<Individual> {
    if probability > 100 {
        return Err(EvolutionError::InvalidMutationProbability(probability));
    }
    if genes.is_empty() {
        return Err(EvolutionError::EmptyAlphabet);
    }
    if probability == 0 {
        return Ok(individual.clone());
    }

    let symbols = genes.symbols();
    Ok(individual
        .genes()
        .iter()
        .map(|&gene| {
            if rng.gen_ratio(u32::from(probability), 100) {
                symbols[rng.gen_range(0..symbols.len())]
            } else {
                gene
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_crossover_splices_at_point() {
        let a = Individual::from("AAAAAA");
        let b = Individual::from("CCCCCC");
        assert_eq!(crossover(&a, &b, 2).unwrap(), Individual::from("AACCCC"));
        assert_eq!(crossover(&b, &a, 2).unwrap(), Individual::from("CCAAAA"));
    }

    #[test]
    fn test_crossover_rejects_bad_point() {
        let a = Individual::from("ACGT");
        let b = Individual::from("TGCA");
        assert!(matches!(
            crossover(&a, &b, 0),
            Err(EvolutionError::InvalidCrossoverPoint { point: 0, length: 4 })
        ));
        assert!(matches!(
            crossover(&a, &b, 4),
            Err(EvolutionError::InvalidCrossoverPoint { point: 4, length: 4 })
        ));
    }

    #[test]
    fn test_crossover_rejects_length_mismatch() {
        let a = Individual::from("ACGT");
        let b = Individual::from("TGC");
        assert!(matches!(
            crossover(&a, &b, 1),
            Err(EvolutionError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn test_random_crossover_point_in_range() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..200 {
            let point = random_crossover_point(5, &mut rng).unwrap();
            assert!((1..5).contains(&point));
        }
        assert!(random_crossover_point(1, &mut rng).is_err());
    }

    #[test]
    fn test_mutate_zero_is_identity() {
        let mut rng = StdRng::seed_from_u64(2);
        let individual = Individual::from("ACGTACGTACGT");
        let mutated = mutate(&individual, 0, &GeneAlphabet::nucleotides(), &mut rng).unwrap();
        assert_eq!(mutated, individual);
    }

    #[test]
    fn test_mutate_full_redraws_every_gene() {
        // Single-symbol alphabet makes "every gene redrawn" observable.
        let mut rng = StdRng::seed_from_u64(3);
        let individual = Individual::from("ACGTACGT");
        let genes = GeneAlphabet::new(vec!['G']);
        let mutated = mutate(&individual, 100, &genes, &mut rng).unwrap();
        assert_eq!(mutated, Individual::from("GGGGGGGG"));
    }

    #[test]
    fn test_mutate_rejects_probability_over_100() {
        let mut rng = StdRng::seed_from_u64(4);
        let individual = Individual::from("ACGT");
        assert!(matches!(
            mutate(&individual, 101, &GeneAlphabet::nucleotides(), &mut rng),
            Err(EvolutionError::InvalidMutationProbability(101))
        ));
    }

    #[test]
    fn test_mutate_stays_in_alphabet() {
        let mut rng = StdRng::seed_from_u64(5);
        let genes = GeneAlphabet::nucleotides();
        let individual = Individual::from("AAAAAAAAAAAAAAAAAAAA");
        let mutated = mutate(&individual, 50, &genes, &mut rng).unwrap();
        assert_eq!(mutated.len(), individual.len());
        assert!(genes.check(mutated.genes()).is_ok());
    }
}
