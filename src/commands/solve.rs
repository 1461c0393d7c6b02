//! Word solving command
//!
//! Plays a simulated game against a target word and returns the solution path.

use crate::core::{GameConstraint, Pattern, Word};
use crate::solver::{Solver, play_simulated};
use anyhow::{Context, Result, ensure};

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Only filled in when scores were requested
    pub expected_remaining: Option<f64>,
}

/// Solve `target` with the given solver
///
/// With `with_scores`, every step also carries the expected-remaining score of
/// the guess it played.
///
/// # Errors
///
/// Returns an error if the target is not a valid word, is not one of the
/// solver's solutions, or the solver runs out of candidates.
pub fn solve_word(solver: &Solver<'_>, target: &str, with_scores: bool) -> Result<SolveResult> {
    let target_word = Word::new(target).context("Invalid target word")?;
    ensure!(
        solver.solutions().contains(&target_word),
        "'{target}' is not in the solution list"
    );

    let report = play_simulated(solver, &target_word)?;

    let mut constraint = GameConstraint::new();
    let mut guesses = Vec::with_capacity(report.rows.len());
    for row in &report.rows {
        let candidates_before = solver.candidates(&constraint).len();
        let expected_remaining = (with_scores && candidates_before > 1)
            .then(|| solver.score(row.word(), &constraint));

        constraint = constraint.combine(&row.constraint());
        guesses.push(GuessStep {
            word: row.word().text().to_string(),
            pattern: row.pattern(),
            candidates_before,
            candidates_after: solver.candidates(&constraint).len(),
            expected_remaining,
        });
    }

    Ok(SolveResult {
        success: report.outcome.is_solved(),
        guesses,
        target: target_word.text().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::SOLUTIONS;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn solve_word_succeeds() {
        let solutions = words_from_slice(SOLUTIONS);
        let roate = Word::new("roate").unwrap();
        let solver = Solver::new(&solutions, &solutions).with_openers(vec![&roate]);

        let result = solve_word(&solver, "crane", false).unwrap();

        assert!(result.success);
        let words: Vec<&str> = result.guesses.iter().map(|s| s.word.as_str()).collect();
        assert_eq!(words, ["roate", "grace", "crane"]);
        assert_eq!(result.guesses[0].candidates_before, solutions.len());
        assert_eq!(result.guesses[0].candidates_after, 23);
        assert!(result.guesses[2].pattern.is_perfect());
        assert!(result.guesses.iter().all(|s| s.expected_remaining.is_none()));
    }

    #[test]
    fn candidates_never_grow() {
        let solutions = words_from_slice(&SOLUTIONS[..200]);
        let solver = Solver::new(&solutions, &solutions).with_seed(3);

        let result = solve_word(&solver, SOLUTIONS[57], true).unwrap();

        assert!(!result.guesses.is_empty());
        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.candidates_after >= 1);
        }
    }

    #[test]
    fn scores_are_reported_when_requested() {
        let solutions = words_from_slice(&["crane", "crate", "grate", "irate"]);
        let solver = Solver::new(&solutions, &solutions).with_openers(Vec::new());

        let result = solve_word(&solver, "irate", true).unwrap();

        // First guess scored against all four candidates
        assert_eq!(result.guesses[0].expected_remaining, Some(1.5));
    }

    #[test]
    fn solve_unknown_target_returns_error() {
        let solutions = words_from_slice(&["crane", "crate"]);
        let solver = Solver::new(&solutions, &solutions);

        assert!(solve_word(&solver, "zzzzz", false).is_err());
        assert!(solve_word(&solver, "toolong", false).is_err());
    }
}
