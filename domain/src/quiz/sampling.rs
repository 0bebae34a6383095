//! Random selection of the correct breed and its decoys.
//!
//! Decoys are drawn without replacement (shuffle, then take a prefix),
//! so options are always distinct within a round. Nothing is remembered
//! between rounds.

use crate::breed::entities::Breed;
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use std::collections::HashSet;

/// Default number of options shown per question
pub const DEFAULT_OPTION_COUNT: usize = 4;

/// Pick the correct breed uniformly from the cache
pub fn pick_correct<'a, R: Rng + ?Sized>(breeds: &'a [Breed], rng: &mut R) -> Option<&'a Breed> {
    breeds.choose(rng)
}

/// Build the shuffled option list for a round.
///
/// Draws up to `option_count - 1` distinct decoys from `breeds` (excluding
/// `correct`), appends `correct`, then shuffles the whole list. When the
/// cache is too small the list is shorter, but still distinct.
pub fn draw_options<R: Rng + ?Sized>(
    breeds: &[Breed],
    correct: &Breed,
    option_count: usize,
    rng: &mut R,
) -> Vec<Breed> {
    let decoy_count = option_count.saturating_sub(1);

    let mut seen = HashSet::with_capacity(breeds.len());
    seen.insert(correct);
    let mut candidates: Vec<&Breed> = breeds.iter().filter(|b| seen.insert(*b)).collect();

    candidates.shuffle(rng);
    candidates.truncate(decoy_count);

    let mut options: Vec<Breed> = candidates.into_iter().cloned().collect();
    options.push(correct.clone());
    options.shuffle(rng);
    options
}
