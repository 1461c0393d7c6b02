//! Wordle Constraints - CLI
//!
//! Suggests Wordle guesses by tracking what the feedback proves about each
//! letter and picking the word expected to leave the fewest candidates.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use wordle_constraints::{
    commands::{
        analyze_frequencies, parse_history, rank_history, run_benchmark, run_simple,
        run_test_all, solve_word,
    },
    core::Word,
    output::{
        print_benchmark_result, print_frequency_report, print_rank_result, print_solve_result,
        print_test_all_statistics,
    },
    solver::{GuessPool, Solver},
    wordlists::{
        EXTRA_GUESSES, SOLUTIONS,
        loader::{load_from_file, valid_guesses, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_constraints",
    about = "Wordle solver that narrows candidates with per-letter constraints",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Replace the embedded solution list (one word per line)
    #[arg(long, global = true)]
    solutions: Option<PathBuf>,

    /// Replace the embedded extra-guess list (one word per line)
    #[arg(long, global = true)]
    guesses: Option<PathBuf>,

    /// Seed for the opening-guess pick
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Always open with this word
    #[arg(long, global = true)]
    opener: Option<String>,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive assistant for a real game (default)
    Simple,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts and expected-remaining scores
        #[arg(short, long)]
        details: bool,
    },

    /// Rank guesses for a game in progress
    Rank {
        /// Played rows as word:pattern, e.g. tired:-YYY- arise:-YGYG
        history: Vec<String>,

        /// Score every valid guess instead of only the candidates
        #[arg(short, long)]
        all: bool,

        /// Number of guesses to show
        #[arg(short = 'n', long, default_value = "20")]
        top: usize,
    },

    /// Letter frequency analysis of the solution list
    Frequency {
        /// Number of words to show per score
        #[arg(short = 'n', long, default_value = "20")]
        top: usize,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of solution words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },

    /// Test solver on ALL solution words
    TestAll {
        /// Limit number of words to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Load the solution and extra-guess lists, embedded unless overridden
fn load_wordlists(cli: &Cli) -> Result<(Vec<Word>, Vec<Word>)> {
    let solutions = match &cli.solutions {
        Some(path) => load_from_file(path)
            .with_context(|| format!("Failed to read solutions from {}", path.display()))?,
        None => words_from_slice(SOLUTIONS),
    };
    let extra = match &cli.guesses {
        Some(path) => load_from_file(path)
            .with_context(|| format!("Failed to read guesses from {}", path.display()))?,
        None => words_from_slice(EXTRA_GUESSES),
    };
    anyhow::ensure!(!solutions.is_empty(), "The solution list is empty");
    Ok((solutions, extra))
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let (solutions, extra) = load_wordlists(&cli)?;
    let guesses = valid_guesses(&solutions, &extra);
    let opener = cli
        .opener
        .as_deref()
        .map(Word::new)
        .transpose()
        .context("Invalid opener")?;

    let mut solver = Solver::new(&guesses, &solutions);
    if let Some(seed) = cli.seed {
        solver = solver.with_seed(seed);
    }
    if let Some(opener) = &opener {
        solver = solver.with_openers(vec![opener]);
    }

    match cli.command.unwrap_or(Commands::Simple) {
        Commands::Simple => run_simple(&solver),
        Commands::Solve { word, details } => {
            let result = solve_word(&solver, &word, details)?;
            print_solve_result(&result, details);
            Ok(())
        }
        Commands::Rank { history, all, top } => {
            let history = parse_history(&history)?;
            let pool = if all {
                GuessPool::ValidGuesses
            } else {
                GuessPool::Candidates
            };
            let result = rank_history(&solver, history, pool, top, true)?;
            print_rank_result(&result);
            Ok(())
        }
        Commands::Frequency { top } => {
            print_frequency_report(&analyze_frequencies(&solutions, top));
            Ok(())
        }
        Commands::Benchmark { count } => {
            println!("Running benchmark on the first {count} solution words...");
            let targets = &solutions[..count.min(solutions.len())];
            print_benchmark_result(&run_benchmark(&solver, targets)?);
            Ok(())
        }
        Commands::TestAll { limit } => {
            println!("\n{}", "═".repeat(70));
            println!(" Comprehensive Wordle Solver Test ");
            println!("{}", "═".repeat(70));
            println!("\nTesting against {} possible answers\n", solutions.len());

            let stats = run_test_all(&solver, &solutions, limit)?;
            print_test_all_statistics(&stats);
            Ok(())
        }
    }
}
