//! Expected-remaining scoring
//!
//! A guess is scored by playing it against every current candidate as the
//! hypothetical answer and averaging how many candidates would survive the
//! resulting feedback. Lower is better.

use super::filter::{CandidateFilter, Candidates};
use crate::core::{GameConstraint, Word};

/// A guess paired with its expected number of remaining candidates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessScore<'a> {
    pub word: &'a Word,
    pub expected_remaining: f64,
}

/// Expected number of candidates left after playing `guess`
///
/// Every candidate is treated as equally likely to be the answer. Returns 0.0
/// when there are no candidates.
///
/// # Examples
/// ```
/// use wordle_constraints::core::{GameConstraint, Word};
/// use wordle_constraints::solver::{CandidateFilter, expected_remaining};
/// use wordle_constraints::wordlists::loader::words_from_slice;
///
/// let solutions = words_from_slice(&["crane", "crate", "grate"]);
/// let filter = CandidateFilter::new(&solutions);
/// let candidates = filter.candidates(&GameConstraint::new());
///
/// // CRATE splits the three apart: every answer leaves exactly one candidate
/// let guess = Word::new("crate").unwrap();
/// assert_eq!(expected_remaining(&filter, &guess, &candidates), 1.0);
/// ```
#[must_use]
pub fn expected_remaining(
    filter: &CandidateFilter<'_>,
    guess: &Word,
    candidates: &Candidates<'_>,
) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    let constraint = candidates.constraint();
    let total: usize = candidates
        .iter()
        .map(|solution| {
            let delta = GameConstraint::evaluate(guess, solution);
            let combined = constraint.combine(&delta);
            filter.narrow(&combined, candidates).len()
        })
        .sum();

    total as f64 / candidates.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn single_candidate_scores_one() {
        let solutions = words_from_slice(&["crane"]);
        let filter = CandidateFilter::new(&solutions);
        let candidates = filter.candidates(&GameConstraint::new());

        assert!((expected_remaining(&filter, &word("slate"), &candidates) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn uninformative_guess_keeps_everything() {
        let solutions = words_from_slice(&["crane", "crate", "grate", "irate"]);
        let filter = CandidateFilter::new(&solutions);
        let candidates = filter.candidates(&GameConstraint::new());

        // No letter in common with any candidate: feedback is identical for all
        let score = expected_remaining(&filter, &word("poppy"), &candidates);
        assert!((score - 4.0).abs() < 1e-9);
    }

    #[test]
    fn partial_split_is_averaged() {
        let solutions = words_from_slice(&["crane", "crate", "grate", "irate"]);
        let filter = CandidateFilter::new(&solutions);
        let candidates = filter.candidates(&GameConstraint::new());

        // NOTCH isolates CRANE and CRATE but cannot tell GRATE from IRATE:
        // (1 + 1 + 2 + 2) / 4
        let score = expected_remaining(&filter, &word("notch"), &candidates);
        assert!((score - 1.5).abs() < 1e-9, "{score}");
    }

    #[test]
    fn empty_candidates_score_zero() {
        let solutions = words_from_slice(&["crane"]);
        let filter = CandidateFilter::new(&solutions);
        let impossible = GameConstraint::evaluate(&word("zzzzz"), &word("zzzzz"));
        let candidates = filter.candidates(&impossible);

        assert!(expected_remaining(&filter, &word("crane"), &candidates).abs() < f64::EPSILON);
    }
}
