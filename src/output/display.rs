//! Display functions for command results

use super::formatters::{create_progress_bar, percent};
use crate::commands::{
    BenchmarkResult, FrequencyReport, LetterCount, RankResult, SolveResult, TestAllStatistics,
    WordScore,
};
use crate::core::MAX_GUESSES;
use colored::Colorize;
use rustc_hash::FxHashMap;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            step.word.to_uppercase(),
            step.pattern.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if let Some(expected) = step.expected_remaining {
                println!("  Expected:   {expected:.3} candidates");
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print a guess ranking, best first
pub fn print_rank_result(result: &RankResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "GUESS RANKING".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for row in &result.history {
        println!("  {} {}", row.word().text().to_uppercase(), row.pattern().to_emoji());
    }

    println!(
        "\n{} candidates, {} guesses scored",
        result.candidates.len(),
        result.pool_size
    );
    if result.candidates.len() <= 10 {
        println!("  {}", result.candidates.join(", "));
    }

    println!();
    for guess in &result.ranked {
        let line = format!("{}: {:.3}", guess.word, guess.expected_remaining);
        if guess.is_candidate {
            println!("  {}", line.green());
        } else {
            println!("  {line}");
        }
    }

    println!(
        "\nScored in {:.2}s",
        result.duration.as_secs_f64()
    );
}

/// Print a letter frequency analysis
pub fn print_frequency_report(report: &FrequencyReport) {
    println!("Counted {} 5-letter words", report.total_words);
    print_distribution(&report.letters);

    println!("Chance of appearing at least once in word");
    print_distribution(&report.at_least_once);

    for (position, letters) in report.by_position.iter().enumerate() {
        println!("position {position}");
        print_distribution(letters);
    }

    println!("Letter position frequency scores (green result)");
    print_scores(&report.position_scores);

    println!("Letter frequency scores (yellow or green result)");
    print_scores(&report.letter_scores);
}

fn print_distribution(letters: &[LetterCount]) {
    for letter in letters {
        println!(
            "{}:\t{}\t({})",
            letter.letter,
            percent(letter.share),
            letter.count
        );
    }
    println!("--------------");
}

fn print_scores(scores: &[WordScore]) {
    for score in scores {
        println!("{} ({:.3})", score.word, score.score);
    }
    println!("--------------");
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n{}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!("   Solved:           {}", result.solved);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n{}", "Distribution:".bright_cyan().bold());
    print_distribution_bars(&result.distribution, result.total_words);

    if !result.failures.is_empty() {
        println!("\n{}", "Failed:".red().bold());
        println!("   {}", result.failures.join(", "));
    }
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    let total = stats.total_words.max(1) as f64;

    println!("\n{}", "Overall Performance".bright_cyan().bold());
    println!("  Total words tested:  {}", stats.total_words);
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!("({:.1}%)", stats.solved as f64 / total * 100.0).green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed,
            format!("({:.1}%)", stats.failed as f64 / total * 100.0).red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );
    println!(
        "  Time per word:       {:.1}ms",
        stats.total_time.as_millis() as f64 / total
    );

    println!("\n{}", "Guess Distribution".bright_cyan().bold());
    print_distribution_bars(&stats.guess_distribution, stats.solved);

    if let Some((word, duration)) = &stats.slowest_word {
        println!(
            "\n  Slowest word: {} ({:.1}ms)",
            word.to_uppercase(),
            duration.as_secs_f64() * 1000.0
        );
    }

    if !stats.worst_words.is_empty() {
        println!("\n{}", "Hardest Words (5-6 guesses)".yellow().bold());
        for (word, guesses) in stats.worst_words.iter().take(5) {
            println!("  {} ({} guesses)", word.to_uppercase().yellow(), guesses);
        }
    }

    if !stats.failed_words.is_empty() {
        println!("\n{}", "Unsolved Words".red().bold());
        println!("  {}", stats.failed_words.join(", ").to_uppercase());
    }

    println!("\n{}", "First Guess Usage".bright_cyan().bold());
    let mut first_guesses: Vec<(&String, &usize)> = stats.first_guess_used.iter().collect();
    first_guesses.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

    for (word, count) in first_guesses.iter().take(5) {
        println!(
            "  {}: {} times ({:.1}%)",
            word.to_uppercase(),
            count,
            **count as f64 / total * 100.0
        );
    }
}

fn print_distribution_bars(distribution: &FxHashMap<usize, usize>, total: usize) {
    if total == 0 {
        return;
    }
    let max_count = distribution.values().copied().max().unwrap_or(1);
    for guesses in 1..=MAX_GUESSES {
        let count = distribution.get(&guesses).copied().unwrap_or(0);
        let pct = count as f64 / total as f64 * 100.0;
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!("   {guesses}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
