use crate::domain::models::Hint;
use rand::Rng;
use std::collections::HashSet;

pub const RANDOM_SHIFT_MIN: i32 = -5;
pub const RANDOM_SHIFT_MAX: i32 = 5;

/// Extends `hints` so every key position `1..=key_length` is covered by
/// exactly one hint, then sorts by character position.
///
/// Uncovered positions get a synthesized direct hint with a uniform random
/// shift in `[-5, 5]`. The sort is stable, so a fully covered input passes
/// through unchanged apart from ordering.
pub fn complete<R: Rng + ?Sized>(key_length: usize, mut hints: Vec<Hint>, rng: &mut R) -> Vec<Hint> {
    let covered: HashSet<usize> = hints.iter().map(|h| h.character()).collect();
    for position in 1..=key_length {
        if !covered.contains(&position) {
            hints.push(random_hint(position, rng));
        }
    }
    hints.sort_by_key(|h| h.character());
    hints
}

fn random_hint<R: Rng + ?Sized>(position: usize, rng: &mut R) -> Hint {
    let shift = rng.random_range(RANDOM_SHIFT_MIN..=RANDOM_SHIFT_MAX);
    Hint::Direct {
        character: position,
        person: String::new(),
        shift,
        requirement: "Generated random shift".to_string(),
        hint_text: format!("Het {position}e teken wordt verschoven met {shift}."),
    }
}
