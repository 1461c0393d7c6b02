//! Game loop connecting the solver to a board and a keyboard

use super::engine::Solver;
use crate::core::{MAX_GUESSES, Word};
use crate::error::SolverError;
use crate::game::{BoardReader, BoardRow, GuessDispatcher, SimulatedGame, fold_rows};
use log::info;

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Solved { guesses: usize },
    Failed { guesses: usize },
}

impl GameOutcome {
    #[must_use]
    pub const fn is_solved(self) -> bool {
        matches!(self, Self::Solved { .. })
    }

    #[must_use]
    pub const fn guesses(self) -> usize {
        match self {
            Self::Solved { guesses } | Self::Failed { guesses } => guesses,
        }
    }
}

/// One guess chosen by the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn<'a> {
    pub guess: &'a Word,
    /// Candidates left when the guess was chosen
    pub candidates: usize,
}

/// Result of a finished game
#[derive(Debug, Clone)]
pub struct GameReport<'a> {
    pub outcome: GameOutcome,
    pub turns: Vec<Turn<'a>>,
    /// The final board
    pub rows: Vec<BoardRow>,
}

/// Play a game to the end
///
/// `game` is both the board the feedback is read from and the keyboard the
/// guesses are typed on. Each turn reads the board, folds every row into a
/// constraint, and stops once the latest row is all green or the board is
/// full. Otherwise the next guess is chosen and dispatched.
///
/// # Errors
/// Returns `SolverError::MalformedFeedback` if the board cannot be read and
/// `SolverError::ExhaustedCandidates` if the feedback rules out every word.
///
/// # Examples
/// ```
/// use wordle_constraints::core::Word;
/// use wordle_constraints::game::SimulatedGame;
/// use wordle_constraints::solver::{Solver, play};
/// use wordle_constraints::wordlists::loader::words_from_slice;
///
/// let solutions = words_from_slice(&["crane", "crate", "grate", "irate"]);
/// let solver = Solver::new(&solutions, &solutions);
///
/// let mut game = SimulatedGame::new(Word::new("grate").unwrap());
/// let report = play(&solver, &mut game).unwrap();
///
/// assert!(report.outcome.is_solved());
/// assert_eq!(report.rows.last().unwrap().word().text(), "grate");
/// ```
pub fn play<'a, G>(solver: &Solver<'a>, game: &mut G) -> Result<GameReport<'a>, SolverError>
where
    G: BoardReader + GuessDispatcher + ?Sized,
{
    let mut turns = Vec::new();

    for _ in 0..=MAX_GUESSES {
        let rows = game.read_board()?;
        let constraint = fold_rows(&rows)?;

        if rows.last().is_some_and(BoardRow::is_solved) {
            info!("solved in {} guesses", rows.len());
            let guesses = rows.len();
            return Ok(GameReport {
                outcome: GameOutcome::Solved { guesses },
                turns,
                rows,
            });
        }
        if rows.len() >= MAX_GUESSES {
            info!("out of guesses");
            let guesses = rows.len();
            return Ok(GameReport {
                outcome: GameOutcome::Failed { guesses },
                turns,
                rows,
            });
        }

        let candidates = solver.candidates(&constraint).len();
        let guess = solver.choose_guess(&constraint)?;
        info!("guess {}: {guess} ({candidates} candidates)", rows.len() + 1);
        turns.push(Turn { guess, candidates });
        game.dispatch(guess);
    }

    // The board stopped accepting guesses
    let rows = game.read_board()?;
    let guesses = rows.len();
    Ok(GameReport {
        outcome: GameOutcome::Failed { guesses },
        turns,
        rows,
    })
}

/// Play against a known solution on an in-memory board
///
/// # Errors
/// Returns `SolverError::ExhaustedCandidates` if `solution` is not one of the
/// solver's solution words.
pub fn play_simulated<'a>(
    solver: &Solver<'a>,
    solution: &Word,
) -> Result<GameReport<'a>, SolverError> {
    play(solver, &mut SimulatedGame::new(solution.clone()))
}
