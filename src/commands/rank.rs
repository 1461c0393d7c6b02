//! Guess ranking command
//!
//! Scores every word of a pool against the candidates left by a game history
//! and lists them best first.

use crate::game::{BoardRow, fold_rows};
use crate::solver::{GuessPool, Solver};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// One ranked guess
#[derive(Debug, Clone, PartialEq)]
pub struct RankedGuess {
    pub word: String,
    pub expected_remaining: f64,
    pub is_candidate: bool,
}

/// Result of ranking a guess pool
pub struct RankResult {
    pub history: Vec<BoardRow>,
    pub candidates: Vec<String>,
    pub pool_size: usize,
    /// Best first, at most the requested number
    pub ranked: Vec<RankedGuess>,
    pub duration: Duration,
}

/// Parse `word:pattern` entries into board rows
///
/// # Errors
///
/// Returns an error naming the first entry that cannot be parsed.
pub fn parse_history<S: AsRef<str>>(entries: &[S]) -> Result<Vec<BoardRow>> {
    let rows = entries
        .iter()
        .enumerate()
        .map(|(row, entry)| BoardRow::parse(row, entry.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    fold_rows(&rows)?;
    Ok(rows)
}

/// Rank the guesses of `pool` after `history`, keeping the best `top`
///
/// A progress bar tracks scoring when `show_progress` is set.
///
/// # Errors
///
/// Returns an error if the history leaves no candidates.
pub fn rank_history(
    solver: &Solver<'_>,
    history: Vec<BoardRow>,
    pool: GuessPool,
    top: usize,
    show_progress: bool,
) -> Result<RankResult> {
    let constraint = fold_rows(&history)?;
    let candidates = solver.candidates(&constraint);
    let pool_size = match pool {
        GuessPool::Candidates => candidates.len(),
        GuessPool::ValidGuesses => solver.valid_guesses().len(),
    };

    let pb = if show_progress {
        let pb = ProgressBar::new(pool_size as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let scores = solver.rank_guesses(&constraint, pool, || pb.inc(1))?;
    let duration = start.elapsed();
    pb.finish_and_clear();

    let ranked = scores
        .iter()
        .take(top)
        .map(|score| RankedGuess {
            word: score.word.text().to_string(),
            expected_remaining: score.expected_remaining,
            is_candidate: candidates.contains(score.word.text()),
        })
        .collect();

    Ok(RankResult {
        history,
        candidates: candidates.texts().into_iter().map(str::to_string).collect(),
        pool_size,
        ranked,
        duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::SOLUTIONS;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn shire_history_ranks_both_candidates() {
        let solutions = words_from_slice(SOLUTIONS);
        let solver = Solver::new(&solutions, &solutions);

        let history = parse_history(&["tired:-YYY-", "arise:-YGYG"]).unwrap();
        let result = rank_history(&solver, history, GuessPool::Candidates, 10, false).unwrap();

        assert_eq!(result.candidates, ["shire", "spire"]);
        assert_eq!(result.pool_size, 2);
        let words: Vec<&str> = result.ranked.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words, ["shire", "spire"]);
        assert!(result.ranked.iter().all(|r| r.is_candidate));
        assert!((result.ranked[0].expected_remaining - 1.0).abs() < 1e-9);
    }

    #[test]
    fn all_pool_marks_non_candidates() {
        let solutions = words_from_slice(&["crane", "crate", "grate", "irate"]);
        let guesses = words_from_slice(&["poppy", "notch", "crate", "crane", "grate", "irate"]);
        let solver = Solver::new(&guesses, &solutions);

        let result =
            rank_history(&solver, Vec::new(), GuessPool::ValidGuesses, 3, false).unwrap();

        assert_eq!(result.pool_size, 6);
        assert_eq!(result.ranked.len(), 3);
        // notch ties with the candidates at 1.5 and comes first in the pool
        assert_eq!(result.ranked[0].word, "notch");
        assert!(!result.ranked[0].is_candidate);
    }

    #[test]
    fn bad_history_is_rejected() {
        assert!(parse_history(&["tired"]).is_err());
        assert!(parse_history(&["tired:GGGG"]).is_err());
        assert!(parse_history(&["tir3d:GGGGG"]).is_err());

        let too_long = vec!["tired:-----"; 7];
        assert!(parse_history(&too_long).is_err());
    }

    #[test]
    fn contradictory_history_exhausts_candidates() {
        let solutions = words_from_slice(&["crane", "crate"]);
        let solver = Solver::new(&solutions, &solutions);

        let history = parse_history(&["crane:-----", "crate:GGGGG"]).unwrap();
        assert!(rank_history(&solver, history, GuessPool::Candidates, 5, false).is_err());
    }
}
