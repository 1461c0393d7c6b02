//! Command implementations

pub mod benchmark;
pub mod frequency;
pub mod rank;
pub mod simple;
pub mod solve;
pub mod test_all;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use frequency::{FrequencyReport, LetterCount, WordScore, analyze_frequencies};
pub use rank::{RankResult, RankedGuess, parse_history, rank_history};
pub use simple::{run_session, run_simple};
pub use solve::{GuessStep, SolveResult, solve_word};
pub use test_all::{TestAllStatistics, WordTestResult, run_test_all, summarize};
