//! Error types shared by the solver and the game collaborators

use crate::core::{MAX_GUESSES, WORD_LENGTH, WordError};
use thiserror::Error;

/// Errors surfaced to the driver loop
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// No dictionary word satisfies the accumulated constraint
    #[error("No candidates remain; the feedback contradicts the word list")]
    ExhaustedCandidates,
    /// The board reported feedback that cannot be folded into a constraint
    #[error("Malformed feedback: {0}")]
    MalformedFeedback(#[from] FeedbackError),
    #[error(transparent)]
    InvalidWord(#[from] WordError),
}

/// Why a board row was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("row {row} has {count} tiles, expected {expected}", expected = WORD_LENGTH)]
    WrongTileCount { row: usize, count: usize },
    #[error("row {row} has unrecognized tile result '{result}'")]
    UnknownResult { row: usize, result: String },
    #[error("row {row} has tile letter '{letter}' which is not an ASCII letter")]
    InvalidLetter { row: usize, letter: char },
    #[error("row {row} has unreadable pattern '{pattern}'")]
    InvalidPattern { row: usize, pattern: String },
    #[error("board has {0} rows, at most {max} are allowed", max = MAX_GUESSES)]
    TooManyRows(usize),
}
