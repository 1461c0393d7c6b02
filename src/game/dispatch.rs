//! Sending a chosen guess to a game as key presses

use crate::core::{WORD_LENGTH, Word};

/// A single key event sent to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Letter(char),
    Submit,
}

/// The key events that type `word` and submit it
///
/// # Examples
/// ```
/// use wordle_constraints::core::Word;
/// use wordle_constraints::game::{KeyInput, key_inputs};
///
/// let keys = key_inputs(&Word::new("crane").unwrap());
/// assert_eq!(keys[0], KeyInput::Letter('c'));
/// assert_eq!(keys[5], KeyInput::Submit);
/// ```
#[must_use]
pub fn key_inputs(word: &Word) -> [KeyInput; WORD_LENGTH + 1] {
    let mut keys = [KeyInput::Submit; WORD_LENGTH + 1];
    for (key, &ch) in keys.iter_mut().zip(word.chars()) {
        *key = KeyInput::Letter(char::from(ch));
    }
    keys
}

/// Receives the solver's guesses
pub trait GuessDispatcher {
    /// Deliver one key event to the game
    fn press(&mut self, key: KeyInput);

    /// Type `guess` and submit it
    fn dispatch(&mut self, guess: &Word) {
        for key in key_inputs(guess) {
            self.press(key);
        }
    }
}
