//! Test all answers - comprehensive solver evaluation
//!
//! Runs the solver against every solution word and generates statistics.

use crate::core::Word;
use crate::solver::{Solver, play_simulated};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result from testing a single word
#[derive(Debug, Clone)]
pub struct WordTestResult {
    pub word: String,
    pub guesses: Vec<String>,
    pub success: bool,
    pub duration: Duration,
}

/// Statistics from testing all words
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    pub guess_distribution: FxHashMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    pub slowest_word: Option<(String, Duration)>,
    pub worst_words: Vec<(String, usize)>,
    pub failed_words: Vec<String>,
    pub first_guess_used: FxHashMap<String, usize>,
}

/// Run solver on all solution words (or the first `limit`)
///
/// # Errors
///
/// Returns an error if the solver runs out of candidates for one of the words.
pub fn run_test_all(
    solver: &Solver<'_>,
    solution_words: &[Word],
    limit: Option<usize>,
) -> Result<TestAllStatistics> {
    let test_words = &solution_words[..limit.map_or(solution_words.len(), |n| {
        n.min(solution_words.len())
    })];

    let pb = ProgressBar::new(test_words.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );

    let mut results = Vec::with_capacity(test_words.len());
    let total_start = Instant::now();

    for (idx, answer_word) in test_words.iter().enumerate() {
        let word_start = Instant::now();
        let report = play_simulated(solver, answer_word)?;

        results.push(WordTestResult {
            word: answer_word.text().to_string(),
            guesses: report
                .rows
                .iter()
                .map(|row| row.word().text().to_string())
                .collect(),
            success: report.outcome.is_solved(),
            duration: word_start.elapsed(),
        });

        if idx % 10 == 0 {
            let solved: Vec<usize> = results
                .iter()
                .filter(|r| r.success)
                .map(|r| r.guesses.len())
                .collect();
            if !solved.is_empty() {
                let avg = solved.iter().sum::<usize>() as f64 / solved.len() as f64;
                pb.set_message(format!("Avg: {avg:.2}"));
            }
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    Ok(summarize(&results, total_start.elapsed()))
}

/// Aggregate per-word results
#[must_use]
pub fn summarize(results: &[WordTestResult], total_time: Duration) -> TestAllStatistics {
    let mut guess_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut first_guess_used: FxHashMap<String, usize> = FxHashMap::default();

    for result in results {
        if result.success {
            *guess_distribution.entry(result.guesses.len()).or_insert(0) += 1;
        }
        if let Some(first) = result.guesses.first() {
            *first_guess_used.entry(first.clone()).or_insert(0) += 1;
        }
    }

    let solved_counts = || {
        results
            .iter()
            .filter(|r| r.success)
            .map(|r| r.guesses.len())
    };
    let solved = solved_counts().count();
    let average_guesses = if solved > 0 {
        solved_counts().sum::<usize>() as f64 / solved as f64
    } else {
        0.0
    };

    let mut worst_words: Vec<(String, usize)> = results
        .iter()
        .filter(|r| r.success && r.guesses.len() >= 5)
        .map(|r| (r.word.clone(), r.guesses.len()))
        .collect();
    worst_words.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    worst_words.truncate(10);

    TestAllStatistics {
        total_words: results.len(),
        solved,
        failed: results.len() - solved,
        guess_distribution,
        total_time,
        average_guesses,
        max_guesses: solved_counts().max().unwrap_or(0),
        min_guesses: solved_counts().min().unwrap_or(0),
        slowest_word: results
            .iter()
            .max_by_key(|r| r.duration)
            .map(|r| (r.word.clone(), r.duration)),
        worst_words,
        failed_words: results
            .iter()
            .filter(|r| !r.success)
            .map(|r| r.word.clone())
            .collect(),
        first_guess_used,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::SOLUTIONS;
    use crate::wordlists::loader::words_from_slice;

    fn result(word: &str, guesses: &[&str], success: bool, millis: u64) -> WordTestResult {
        WordTestResult {
            word: word.to_string(),
            guesses: guesses.iter().map(|g| (*g).to_string()).collect(),
            success,
            duration: Duration::from_millis(millis),
        }
    }

    #[test]
    fn summarize_counts_solved_and_failed() {
        let results = [
            result("crane", &["roate", "crane"], true, 4),
            result("shire", &["roate", "purge", "bride", "shire"], true, 9),
            result(
                "jolly",
                &["raise", "could", "jolly", "golly", "holly", "dolly"],
                false,
                2,
            ),
            result(
                "eerie",
                &["roate", "purge", "verse", "geese", "eerie"],
                true,
                1,
            ),
        ];

        let stats = summarize(&results, Duration::from_secs(1));

        assert_eq!(stats.total_words, 4);
        assert_eq!(stats.solved, 3);
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.failed_words, ["jolly"]);
        assert_eq!(stats.min_guesses, 2);
        assert_eq!(stats.max_guesses, 5);
        assert!((stats.average_guesses - 11.0 / 3.0).abs() < 1e-9);
        assert_eq!(stats.worst_words, [("eerie".to_string(), 5)]);
        assert_eq!(stats.first_guess_used.get("roate"), Some(&3));
        assert_eq!(stats.first_guess_used.get("raise"), Some(&1));
        assert_eq!(
            stats.slowest_word,
            Some(("shire".to_string(), Duration::from_millis(9)))
        );
    }

    #[test]
    fn summarize_empty() {
        let stats = summarize(&[], Duration::ZERO);
        assert_eq!(stats.total_words, 0);
        assert!(stats.average_guesses.abs() < f64::EPSILON);
        assert!(stats.slowest_word.is_none());
    }

    #[test]
    fn run_test_all_respects_limit() {
        let solutions = words_from_slice(SOLUTIONS);
        let solver = Solver::new(&solutions, &solutions).with_seed(9);

        let stats = run_test_all(&solver, &solutions, Some(12)).unwrap();

        assert_eq!(stats.total_words, 12);
        assert_eq!(stats.solved + stats.failed, 12);
        assert_eq!(stats.first_guess_used.values().sum::<usize>(), 12);
    }
}
