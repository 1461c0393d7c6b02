//! In-memory game against a known solution

use super::board::{BoardReader, BoardRow};
use super::dispatch::{GuessDispatcher, KeyInput};
use crate::core::{MAX_GUESSES, WORD_LENGTH, Word};
use crate::error::SolverError;

/// A game that scores typed guesses against a fixed solution
///
/// Acts as both board and keyboard, so the driver can play it exactly as it
/// would play a real game.
#[derive(Debug, Clone)]
pub struct SimulatedGame {
    solution: Word,
    typed: String,
    rows: Vec<BoardRow>,
}

impl SimulatedGame {
    #[must_use]
    pub const fn new(solution: Word) -> Self {
        Self {
            solution,
            typed: String::new(),
            rows: Vec::new(),
        }
    }

    #[must_use]
    pub const fn solution(&self) -> &Word {
        &self.solution
    }

    #[must_use]
    pub fn rows(&self) -> &[BoardRow] {
        &self.rows
    }
}

impl BoardReader for SimulatedGame {
    fn read_board(&mut self) -> Result<Vec<BoardRow>, SolverError> {
        Ok(self.rows.clone())
    }
}

impl GuessDispatcher for SimulatedGame {
    fn press(&mut self, key: KeyInput) {
        match key {
            KeyInput::Letter(ch) => {
                if self.typed.len() < WORD_LENGTH {
                    self.typed.push(ch);
                }
            }
            KeyInput::Submit => {
                let typed = std::mem::take(&mut self.typed);
                // Like the real game, incomplete or unknown entries are ignored
                if self.rows.len() < MAX_GUESSES
                    && let Ok(guess) = Word::new(typed)
                {
                    self.rows.push(BoardRow::scored(guess, &self.solution));
                }
            }
        }
    }
}
