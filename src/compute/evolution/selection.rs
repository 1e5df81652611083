//! Tournament selection.

use rand::Rng;
use rand::seq::index;

use crate::schema::TournamentDraw;

use super::error::{EvolutionError, Result};
use super::population::Generation;

/// Pick a parent as the best of `size` distinct random members of `generation`.
///
/// Candidates are drawn without replacement within this tournament. Each
/// call draws independently, so two tournaments in the same step may share
/// candidates. `size` is capped at the generation size.
pub fn tournament<R: Rng + ?Sized>(
    generation: &Generation,
    size: usize,
    rng: &mut R,
) -> Result<TournamentDraw> {
    let population = generation.len();
    if population == 0 {
        return Err(EvolutionError::EmptyGeneration);
    }
    let amount = size.clamp(1, population);

    let sampled: Vec<usize> = index::sample(rng, population, amount).into_vec();
    let winner = sampled
        .iter()
        .copied()
        .filter_map(|i| generation.get(i).map(|scored| (scored, i)))
        .min()
        .map(|(_, i)| i)
        .ok_or(EvolutionError::EmptyGeneration)?;

    log::trace!("Tournament sampled {:?}, winner {}", sampled, winner);
    Ok(TournamentDraw { sampled, winner })
}
