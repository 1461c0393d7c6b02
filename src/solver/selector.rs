//! Guess selection over a pool of words
//!
//! Scores the pool in parallel and picks the lowest expected-remaining score.
//! Scores are collected in pool order, so ties go to the earliest word.

use super::filter::{CandidateFilter, Candidates};
use super::scorer::{GuessScore, expected_remaining};
use crate::core::Word;
use rayon::prelude::*;

/// Strong opening guesses, derived once by scoring every valid guess against
/// the full solution list
pub const OPENING_GUESSES: [&str; 20] = [
    "roate", "raise", "raile", "soare", "irate", "orate", "artel", "ariel", "arise", "taler",
    "arose", "arles", "ratel", "aesir", "alter", "later", "tares", "alert", "realo", "strae",
];

/// Score every word of `pool` against `candidates`, in pool order
///
/// `on_scored` runs once per finished word, from worker threads.
pub fn score_pool<'a, F>(
    filter: &CandidateFilter<'_>,
    pool: &[&'a Word],
    candidates: &Candidates<'_>,
    on_scored: F,
) -> Vec<GuessScore<'a>>
where
    F: Fn() + Sync,
{
    pool.par_iter()
        .map(|&word| {
            let score = GuessScore {
                word,
                expected_remaining: expected_remaining(filter, word, candidates),
            };
            on_scored();
            score
        })
        .collect()
}

/// Select the guess leaving the fewest expected candidates
///
/// Returns `None` if the pool is empty.
///
/// # Examples
/// ```
/// use wordle_constraints::core::{GameConstraint, Word};
/// use wordle_constraints::solver::{CandidateFilter, select_best_guess};
/// use wordle_constraints::wordlists::loader::words_from_slice;
///
/// let solutions = words_from_slice(&["crane", "crate", "grate", "irate"]);
/// let filter = CandidateFilter::new(&solutions);
/// let candidates = filter.candidates(&GameConstraint::new());
///
/// let pool: Vec<&Word> = candidates.iter().collect();
/// let best = select_best_guess(&filter, &pool, &candidates).unwrap();
///
/// // Every candidate leaves 1.5 words on average; the earliest one wins
/// assert_eq!(best.word.text(), "crane");
/// assert_eq!(best.expected_remaining, 1.5);
/// ```
#[must_use]
pub fn select_best_guess<'a>(
    filter: &CandidateFilter<'_>,
    pool: &[&'a Word],
    candidates: &Candidates<'_>,
) -> Option<GuessScore<'a>> {
    score_pool(filter, pool, candidates, || {})
        .into_iter()
        .reduce(|best, next| {
            if next.expected_remaining < best.expected_remaining {
                next
            } else {
                best
            }
        })
}

/// Score the pool and sort ascending; equal scores keep pool order
#[must_use]
pub fn rank_guesses<'a>(
    filter: &CandidateFilter<'_>,
    pool: &[&'a Word],
    candidates: &Candidates<'_>,
) -> Vec<GuessScore<'a>> {
    sort_scores(score_pool(filter, pool, candidates, || {}))
}

/// Sort ascending by expected remaining; stable
#[must_use]
pub fn sort_scores(mut scores: Vec<GuessScore<'_>>) -> Vec<GuessScore<'_>> {
    scores.sort_by(|a, b| a.expected_remaining.total_cmp(&b.expected_remaining));
    scores
}
