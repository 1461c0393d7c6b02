//! Core domain types for Wordle
//!
//! Words, tile feedback, and the per-letter constraint state that accumulates
//! knowledge about the hidden answer. Everything here is pure data with no I/O.

mod constraint;
mod pattern;
mod word;

pub use constraint::{ConstraintKey, GameConstraint, LetterConstraint, PositionMask};
pub use pattern::{Feedback, Pattern};
pub use word::{Word, WordError};

/// Letters in every word
pub const WORD_LENGTH: usize = 5;

/// Rows on the board
pub const MAX_GUESSES: usize = 6;

/// Size of the lowercase ASCII alphabet
pub const ALPHABET_SIZE: usize = 26;

/// Index of a lowercase ASCII letter in the alphabet (`b'a'` -> 0)
#[inline]
#[must_use]
pub const fn letter_rank(letter: u8) -> usize {
    (letter - b'a') as usize
}

/// Lowercase ASCII letter for an alphabet index (0 -> `b'a'`)
#[inline]
#[must_use]
pub const fn rank_letter(rank: usize) -> u8 {
    b'a' + rank as u8
}
