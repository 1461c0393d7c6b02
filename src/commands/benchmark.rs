//! Benchmark command
//!
//! Tests solver performance across multiple words.

use crate::core::Word;
use crate::solver::{Solver, play_simulated};
use anyhow::Result;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    /// Solved games only
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: FxHashMap<usize, usize>,
    pub failures: Vec<String>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Run benchmark on a set of target words
///
/// # Errors
///
/// Returns an error if a target is not one of the solver's solutions.
pub fn run_benchmark(solver: &Solver<'_>, target_words: &[Word]) -> Result<BenchmarkResult> {
    let start = Instant::now();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut failures = Vec::new();

    for target in target_words {
        let outcome = play_simulated(solver, target)?.outcome;
        let guesses = outcome.guesses();

        if outcome.is_solved() {
            total_guesses += guesses;
            min_guesses = min_guesses.min(guesses);
            max_guesses = max_guesses.max(guesses);
            *distribution.entry(guesses).or_insert(0) += 1;
        } else {
            failures.push(target.text().to_string());
        }
    }

    let duration = start.elapsed();
    let total_words = target_words.len();
    let solved = total_words - failures.len();

    Ok(BenchmarkResult {
        total_words,
        solved,
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        min_guesses: if solved > 0 { min_guesses } else { 0 },
        max_guesses,
        distribution,
        failures,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::SOLUTIONS;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn benchmark_runs_on_sample() {
        let solutions = words_from_slice(SOLUTIONS);
        let solver = Solver::new(&solutions, &solutions).with_seed(5);
        let targets: Vec<Word> = solutions.iter().step_by(230).cloned().collect();

        let result = run_benchmark(&solver, &targets).unwrap();

        assert_eq!(result.total_words, targets.len());
        assert_eq!(
            result.distribution.values().sum::<usize>() + result.failures.len(),
            targets.len()
        );
        assert!(result.min_guesses >= 1);
        assert!(result.average_guesses >= result.min_guesses as f64);
    }

    #[test]
    fn benchmark_reports_distribution() {
        let solutions = words_from_slice(&["crane", "crate", "grate", "irate"]);
        let solver = Solver::new(&solutions, &solutions).with_openers(Vec::new());

        let result = run_benchmark(&solver, &solutions).unwrap();

        // CRANE is scored first among equals and always opens
        assert_eq!(result.solved, 4);
        assert_eq!(result.distribution.get(&1), Some(&1));
        assert_eq!(result.min_guesses, 1);
        assert!(result.failures.is_empty());
    }

    #[test]
    fn benchmark_rejects_unknown_targets() {
        let solutions = words_from_slice(&["crane", "crate"]);
        let solver = Solver::new(&solutions, &solutions);
        let targets = words_from_slice(&["zesty"]);

        assert!(run_benchmark(&solver, &targets).is_err());
    }
}
