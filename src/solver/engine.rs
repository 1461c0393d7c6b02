//! Main Wordle solver interface

use super::filter::{CandidateFilter, Candidates};
use super::scorer::{GuessScore, expected_remaining};
use super::selector::{OPENING_GUESSES, score_pool, select_best_guess, sort_scores};
use crate::core::{GameConstraint, Word};
use crate::error::SolverError;
use log::{debug, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::sync::{Mutex, PoisonError};

/// Which words a ranking scores
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessPool {
    /// Only words that can still be the answer
    Candidates,
    /// Every valid guess, answer or not
    ValidGuesses,
}

/// Main Wordle solver
///
/// Owns the candidate cache for one session. Guesses after the opening are
/// chosen from the current candidates only, which keeps every guess a
/// possible win.
pub struct Solver<'a> {
    filter: CandidateFilter<'a>,
    valid_guesses: &'a [Word],
    openers: Vec<&'a Word>,
    rng: Mutex<StdRng>,
}

impl<'a> Solver<'a> {
    /// Create a new solver over the given word lists
    ///
    /// # Parameters
    /// - `valid_guesses`: All valid guessable words
    /// - `solutions`: Subset of words that can be answers
    ///
    /// Opening-table words missing from both lists are skipped.
    #[must_use]
    pub fn new(valid_guesses: &'a [Word], solutions: &'a [Word]) -> Self {
        let openers = OPENING_GUESSES
            .iter()
            .filter_map(|&text| {
                let found = find_word(valid_guesses, text).or_else(|| find_word(solutions, text));
                if found.is_none() {
                    warn!("opening guess '{text}' is not in the word list");
                }
                found
            })
            .collect();

        Self {
            filter: CandidateFilter::new(solutions),
            valid_guesses,
            openers,
            rng: Mutex::new(StdRng::seed_from_u64(rand::random())),
        }
    }

    /// Make the opening pick reproducible
    #[must_use]
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            ..self
        }
    }

    /// Replace the opening table
    #[must_use]
    pub fn with_openers(self, openers: Vec<&'a Word>) -> Self {
        Self { openers, ..self }
    }

    /// Opening words the solver picks from
    #[must_use]
    pub fn openers(&self) -> &[&'a Word] {
        &self.openers
    }

    #[must_use]
    pub const fn solutions(&self) -> &'a [Word] {
        self.filter.solutions()
    }

    #[must_use]
    pub const fn valid_guesses(&self) -> &'a [Word] {
        self.valid_guesses
    }

    #[must_use]
    pub const fn filter(&self) -> &CandidateFilter<'a> {
        &self.filter
    }

    /// Solution words consistent with `constraint`
    #[must_use]
    pub fn candidates(&self, constraint: &GameConstraint) -> Candidates<'a> {
        self.filter.candidates(constraint)
    }

    /// Expected number of candidates left after playing `guess`
    #[must_use]
    pub fn score(&self, guess: &Word, constraint: &GameConstraint) -> f64 {
        expected_remaining(&self.filter, guess, &self.candidates(constraint))
    }

    /// Choose the next guess
    ///
    /// A fresh game gets a random word from the opening table. Otherwise every
    /// candidate is scored and the lowest expected-remaining score wins, ties
    /// going to the earliest candidate.
    ///
    /// # Errors
    /// Returns `SolverError::ExhaustedCandidates` if no solution word fits
    /// `constraint`.
    pub fn choose_guess(&self, constraint: &GameConstraint) -> Result<&'a Word, SolverError> {
        if constraint.is_fresh()
            && let Some(opener) = self.pick_opener()
        {
            debug!("opening with {opener}");
            return Ok(opener);
        }

        let candidates = self.candidates(constraint);
        if candidates.is_empty() {
            return Err(SolverError::ExhaustedCandidates);
        }
        if candidates.len() == 1 {
            return candidates.first().ok_or(SolverError::ExhaustedCandidates);
        }

        let pool = candidates.to_vec();
        let best = select_best_guess(&self.filter, &pool, &candidates)
            .ok_or(SolverError::ExhaustedCandidates)?;
        debug!(
            "scored {} candidates, best {} leaves {:.3} on average",
            pool.len(),
            best.word,
            best.expected_remaining
        );
        Ok(best.word)
    }

    /// Score a pool of guesses and sort ascending
    ///
    /// `on_scored` runs once per scored word, from worker threads.
    ///
    /// # Errors
    /// Returns `SolverError::ExhaustedCandidates` if no solution word fits
    /// `constraint`.
    pub fn rank_guesses<F>(
        &self,
        constraint: &GameConstraint,
        pool: GuessPool,
        on_scored: F,
    ) -> Result<Vec<GuessScore<'a>>, SolverError>
    where
        F: Fn() + Sync,
    {
        let candidates = self.candidates(constraint);
        if candidates.is_empty() {
            return Err(SolverError::ExhaustedCandidates);
        }

        let words: Vec<&'a Word> = match pool {
            GuessPool::Candidates => candidates.to_vec(),
            GuessPool::ValidGuesses => self.valid_guesses.iter().collect(),
        };
        debug!(
            "ranking {} guesses for {} candidates",
            words.len(),
            candidates.len()
        );

        Ok(sort_scores(score_pool(
            &self.filter,
            &words,
            &candidates,
            on_scored,
        )))
    }

    fn pick_opener(&self) -> Option<&'a Word> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        self.openers.choose(&mut *rng).copied()
    }
}

fn find_word<'a>(words: &'a [Word], text: &str) -> Option<&'a Word> {
    words.iter().find(|w| w.text() == text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::{valid_guesses, words_from_slice};
    use crate::wordlists::{EXTRA_GUESSES, SOLUTIONS};

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn setup_solver() -> (Vec<Word>, Vec<Word>) {
        let solutions = words_from_slice(&["irate", "crate", "grate"]);
        let guesses = words_from_slice(&["crane", "slate", "irate", "crate", "grate"]);
        (guesses, solutions)
    }

    #[test]
    fn fresh_constraint_uses_opening_table() {
        let solutions = words_from_slice(SOLUTIONS);
        let guesses = valid_guesses(&solutions, &words_from_slice(EXTRA_GUESSES));
        let solver = Solver::new(&guesses, &solutions);

        assert_eq!(solver.openers().len(), OPENING_GUESSES.len());
        for _ in 0..20 {
            let guess = solver.choose_guess(&GameConstraint::new()).unwrap();
            assert!(OPENING_GUESSES.contains(&guess.text()));
        }
    }

    #[test]
    fn seeded_openers_repeat() {
        let solutions = words_from_slice(SOLUTIONS);
        let guesses = valid_guesses(&solutions, &words_from_slice(EXTRA_GUESSES));

        let picks = |seed| {
            let solver = Solver::new(&guesses, &solutions).with_seed(seed);
            (0..5)
                .map(|_| {
                    solver
                        .choose_guess(&GameConstraint::new())
                        .unwrap()
                        .text()
                        .to_string()
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(picks(7), picks(7));
    }

    #[test]
    fn missing_openers_fall_back_to_scoring() {
        let (guesses, solutions) = setup_solver();
        let solver = Solver::new(&guesses, &solutions);

        // Only IRATE from the opening table is in this word list
        assert_eq!(solver.openers(), &[&guesses[2]]);

        let solver = solver.with_openers(Vec::new());
        let guess = solver.choose_guess(&GameConstraint::new()).unwrap();
        assert!(solutions.contains(guess));
    }

    #[test]
    fn guesses_come_from_candidates() {
        let solutions = words_from_slice(SOLUTIONS);
        let guesses = valid_guesses(&solutions, &words_from_slice(EXTRA_GUESSES));
        let solver = Solver::new(&guesses, &solutions);

        let state = GameConstraint::evaluate(&word("roate"), &word("crane"));
        let guess = solver.choose_guess(&state).unwrap();
        assert_eq!(guess.text(), "grace");
        assert!(solver.candidates(&state).contains(guess.text()));
    }

    #[test]
    fn shire_state_picks_first_of_tie() {
        let solutions = words_from_slice(SOLUTIONS);
        let solver = Solver::new(&solutions, &solutions);

        let target = word("shire");
        let state = GameConstraint::evaluate(&word("tired"), &target)
            .combine(&GameConstraint::evaluate(&word("arise"), &target));

        assert!((solver.score(&word("shire"), &state) - 1.0).abs() < 1e-9);
        assert!((solver.score(&word("spire"), &state) - 1.0).abs() < 1e-9);
        assert_eq!(solver.choose_guess(&state).unwrap().text(), "shire");
    }

    #[test]
    fn exhausted_candidates_is_an_error() {
        let (guesses, solutions) = setup_solver();
        let solver = Solver::new(&guesses, &solutions);

        let impossible = GameConstraint::evaluate(&word("zzzzz"), &word("zzzzz"));
        assert_eq!(
            solver.choose_guess(&impossible),
            Err(SolverError::ExhaustedCandidates)
        );
        assert!(
            solver
                .rank_guesses(&impossible, GuessPool::Candidates, || {})
                .is_err()
        );
    }

    #[test]
    fn ranking_over_valid_guesses_covers_the_pool() {
        let (guesses, solutions) = setup_solver();
        let solver = Solver::new(&guesses, &solutions);

        let ranked = solver
            .rank_guesses(&GameConstraint::new(), GuessPool::ValidGuesses, || {})
            .unwrap();
        assert_eq!(ranked.len(), guesses.len());

        let ranked = solver
            .rank_guesses(&GameConstraint::new(), GuessPool::Candidates, || {})
            .unwrap();
        assert_eq!(ranked.len(), solutions.len());
    }
}
