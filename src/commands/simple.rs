//! Simple interactive CLI mode
//!
//! The player reads the board and types the guesses; the solver suggests the
//! next word after every row of feedback.

use crate::core::{Feedback, MAX_GUESSES, Pattern, WORD_LENGTH, Word};
use crate::error::SolverError;
use crate::game::{BoardRow, fold_rows};
use crate::output::formatters::tile_row;
use crate::solver::Solver;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// What the player asked for at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
enum Reply {
    Quit,
    New,
    Undo,
    Row(BoardRow),
    Invalid(String),
}

/// Run the simple interactive CLI mode on stdin and stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing the
/// prompts.
pub fn run_simple(solver: &Solver<'_>) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(solver, &mut stdin.lock(), &mut stdout.lock())
}

/// Interactive session over arbitrary input and output
///
/// Ends on `quit` or at the end of input.
///
/// # Errors
///
/// Returns an error if reading or writing fails.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_session<R: BufRead, W: Write>(
    solver: &Solver<'_>,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "\n{}", "Wordle Solver - Interactive Mode".bright_cyan().bold())?;
    writeln!(out, "After each guess, enter the feedback pattern:")?;
    writeln!(out, "  - G/g/🟩 for green (correct position)")?;
    writeln!(out, "  - Y/y/🟨 for yellow (wrong position)")?;
    writeln!(out, "  - -/_/⬜ for gray (not in word)")?;
    writeln!(out, "  - 'win' if the suggestion was right")?;
    writeln!(out, "  - word:pattern if you played a different word")?;
    writeln!(out, "Commands: 'quit', 'new', 'undo'\n")?;

    let mut rows: Vec<BoardRow> = Vec::new();

    loop {
        let constraint = fold_rows(&rows)?;
        let candidates = solver.candidates(&constraint);
        let turn = rows.len() + 1;

        let suggestion = if rows.len() >= MAX_GUESSES {
            writeln!(out, "{}", "Out of guesses. Type 'undo' or 'new'.".red())?;
            None
        } else {
            match solver.choose_guess(&constraint) {
                Ok(guess) => Some(guess),
                Err(SolverError::ExhaustedCandidates) => {
                    writeln!(
                        out,
                        "{}",
                        "No candidates remain! Your feedback may be incorrect.".red()
                    )?;
                    writeln!(out, "Type 'undo' to go back, or 'new' to start over.")?;
                    None
                }
                Err(err) => return Err(err.into()),
            }
        };

        if let Some(guess) = suggestion {
            writeln!(out, "{}", "─".repeat(60).cyan())?;
            writeln!(out, "Turn {turn}: {} candidates remaining", candidates.len())?;
            writeln!(
                out,
                "Suggested guess: {}",
                guess.text().to_uppercase().bright_yellow().bold()
            )?;
            if candidates.len() > 1 && !constraint.is_fresh() {
                writeln!(
                    out,
                    "   Expected remain: {:.2} candidates",
                    solver.score(guess, &constraint)
                )?;
            }
            if candidates.len() <= 10 {
                writeln!(out, "Remaining candidates:")?;
                for candidate in candidates.iter() {
                    writeln!(out, "  • {}", candidate.text().to_uppercase())?;
                }
            }
        }

        let Some(line) = prompt(input, out, "Feedback")? else {
            return Ok(());
        };

        match parse_reply(&line, rows.len(), suggestion) {
            Reply::Quit => {
                writeln!(out, "\nThanks for playing!\n")?;
                return Ok(());
            }
            Reply::New => {
                rows.clear();
                writeln!(out, "\nNew game started!\n")?;
            }
            Reply::Undo => {
                if rows.pop().is_some() {
                    writeln!(out, "Undone! Back to turn {}\n", rows.len() + 1)?;
                } else {
                    writeln!(out, "Nothing to undo!\n")?;
                }
            }
            Reply::Invalid(message) => writeln!(out, "{}\n", message.as_str().red())?,
            Reply::Row(row) => {
                let solved = row.is_solved();
                rows.push(row);
                if solved {
                    print_victory(out, &rows)?;
                    let again = prompt(input, out, "Play again? (yes/no)")?
                        .map(|reply| reply.to_lowercase());
                    if !matches!(again.as_deref(), Some("yes" | "y")) {
                        writeln!(out, "\nThanks for playing!\n")?;
                        return Ok(());
                    }
                    rows.clear();
                    writeln!(out, "\nNew game started!\n")?;
                }
            }
        }
    }
}

fn parse_reply(line: &str, row: usize, suggestion: Option<&Word>) -> Reply {
    let line = line.trim();
    match line.to_lowercase().as_str() {
        "quit" | "q" | "exit" => return Reply::Quit,
        "new" | "n" => return Reply::New,
        "undo" | "u" => return Reply::Undo,
        _ => {}
    }

    if line.contains(':') {
        return match BoardRow::parse(row, line) {
            Ok(parsed) if row < MAX_GUESSES => Reply::Row(parsed),
            Ok(_) => Reply::Invalid("The board is full".to_string()),
            Err(err) => Reply::Invalid(err.to_string()),
        };
    }

    let Some(guess) = suggestion else {
        return Reply::Invalid("No suggestion to apply feedback to; use word:pattern".to_string());
    };
    let feedback = match line.to_lowercase().as_str() {
        "win" | "correct" | "yes" | "solved" => Some([Feedback::Correct; WORD_LENGTH]),
        _ => Pattern::from_str(line).map(Pattern::feedback),
    };
    feedback.map_or_else(
        || Reply::Invalid("Invalid pattern! Use G/Y/-, 'win', or '🟩🟨⬜🟩🟨'".to_string()),
        |feedback| Reply::Row(BoardRow::new(guess.clone(), feedback)),
    )
}

fn print_victory<W: Write>(out: &mut W, rows: &[BoardRow]) -> io::Result<()> {
    let guesses = rows.len();
    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        out,
        "{}",
        "    W O R D L E   S O L V E D !".bright_green().bold()
    )?;
    writeln!(
        out,
        "\n  Solution found in {} {}",
        guesses.to_string().bright_cyan().bold(),
        if guesses == 1 { "guess" } else { "guesses" }
    )?;
    writeln!(out, "\n  Guess history:")?;
    for (i, row) in rows.iter().enumerate() {
        writeln!(
            out,
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            tile_row(row),
            row.pattern().to_emoji()
        )?;
    }
    writeln!(out, "\n{}\n", "═".repeat(60).bright_cyan())
}

/// Read one trimmed line after a prompt; `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> io::Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
