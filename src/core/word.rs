//! Wordle word representation
//!
//! A Word stores a 5-letter word along with a position bitmask for every letter,
//! built once so constraint checks never rescan the text.

use super::{ALPHABET_SIZE, PositionMask, WORD_LENGTH, letter_rank};
use std::fmt;
use thiserror::Error;

/// A 5-letter Wordle word with memoized letter positions
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
    letter_masks: [PositionMask; ALPHABET_SIZE],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly {expected} letters, got {0}", expected = WORD_LENGTH)]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_constraints::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.len() != WORD_LENGTH {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let mut chars = [0u8; WORD_LENGTH];
        chars.copy_from_slice(text.as_bytes());

        let mut letter_masks = [0; ALPHABET_SIZE];
        for (i, &ch) in chars.iter().enumerate() {
            letter_masks[letter_rank(ch)] |= 1 << i;
        }

        Ok(Self {
            text,
            chars,
            letter_masks,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub const fn has_letter(&self, letter: u8) -> bool {
        self.positions_of(letter) != 0
    }

    /// Bitmask of the positions holding `letter` (bit `i` set for position `i`)
    #[inline]
    #[must_use]
    pub const fn positions_of(&self, letter: u8) -> PositionMask {
        self.letter_masks[letter_rank(letter)]
    }

    /// Number of times `letter` occurs in the word
    #[inline]
    #[must_use]
    pub const fn count_of(&self, letter: u8) -> u8 {
        self.positions_of(letter).count_ones() as u8
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
