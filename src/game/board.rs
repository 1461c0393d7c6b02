//! Reading feedback off a game board
//!
//! A board reader reports every played row as letters plus tile results. Rows
//! are validated before they are folded into a constraint, so a bad read is
//! rejected instead of corrupting the game state.

use crate::core::{Feedback, GameConstraint, MAX_GUESSES, Pattern, WORD_LENGTH, Word};
use crate::error::{FeedbackError, SolverError};

/// One played row: the guessed word and the result of each tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardRow {
    word: Word,
    feedback: [Feedback; WORD_LENGTH],
}

impl BoardRow {
    #[must_use]
    pub const fn new(word: Word, feedback: [Feedback; WORD_LENGTH]) -> Self {
        Self { word, feedback }
    }

    /// Row produced by playing `guess` against `solution`
    #[must_use]
    pub fn scored(guess: Word, solution: &Word) -> Self {
        let feedback = Pattern::calculate(&guess, solution).feedback();
        Self::new(guess, feedback)
    }

    /// Build a row from raw `(letter, result)` tiles, `row` being its index on
    /// the board
    ///
    /// Results are `correct`, `present` or `absent`, case-insensitive.
    ///
    /// # Errors
    /// Returns `SolverError::MalformedFeedback` for a wrong tile count, an
    /// unknown result, or a letter outside `a-z`.
    ///
    /// # Examples
    /// ```
    /// use wordle_constraints::game::BoardRow;
    ///
    /// let row = BoardRow::from_tiles(0, &[
    ///     ('t', "absent"),
    ///     ('i', "present"),
    ///     ('r', "present"),
    ///     ('e', "present"),
    ///     ('d', "absent"),
    /// ])
    /// .unwrap();
    /// assert_eq!(row.word().text(), "tired");
    /// assert!(BoardRow::from_tiles(0, &[('t', "absent")]).is_err());
    /// ```
    pub fn from_tiles(row: usize, tiles: &[(char, &str)]) -> Result<Self, SolverError> {
        if tiles.len() != WORD_LENGTH {
            return Err(FeedbackError::WrongTileCount {
                row,
                count: tiles.len(),
            }
            .into());
        }

        let mut text = String::with_capacity(WORD_LENGTH);
        let mut feedback = [Feedback::Absent; WORD_LENGTH];
        for (slot, &(letter, result)) in feedback.iter_mut().zip(tiles) {
            if !letter.is_ascii_alphabetic() {
                return Err(FeedbackError::InvalidLetter { row, letter }.into());
            }
            text.push(letter.to_ascii_lowercase());
            *slot = Feedback::from_name(result).ok_or_else(|| FeedbackError::UnknownResult {
                row,
                result: result.to_string(),
            })?;
        }

        Ok(Self::new(Word::new(text)?, feedback))
    }

    /// Parse a `word:pattern` history entry such as `crane:-Y--G`
    ///
    /// The pattern uses `G`/`Y`/`-` or the emoji squares, see
    /// [`Pattern::from_str`].
    ///
    /// # Errors
    /// Returns `SolverError::InvalidWord` for a bad word and
    /// `SolverError::MalformedFeedback` for a missing or unreadable pattern.
    pub fn parse(row: usize, entry: &str) -> Result<Self, SolverError> {
        let (text, pattern) = entry.split_once(':').ok_or_else(|| FeedbackError::InvalidPattern {
            row,
            pattern: String::new(),
        })?;
        let word = Word::new(text.trim())?;
        let pattern = Pattern::from_str(pattern).ok_or_else(|| FeedbackError::InvalidPattern {
            row,
            pattern: pattern.trim().to_string(),
        })?;
        Ok(Self::new(word, pattern.feedback()))
    }

    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[must_use]
    pub const fn feedback(&self) -> &[Feedback; WORD_LENGTH] {
        &self.feedback
    }

    #[must_use]
    pub fn pattern(&self) -> Pattern {
        Pattern::from_feedback(&self.feedback)
    }

    /// True when every tile is green
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.feedback.iter().all(|&tile| tile == Feedback::Correct)
    }

    /// Constraint delta carried by this row
    #[must_use]
    pub fn constraint(&self) -> GameConstraint {
        GameConstraint::from_feedback(&self.word, &self.feedback)
    }
}

/// Source of real feedback, such as a game page or a person at the keyboard
pub trait BoardReader {
    /// Every row played so far, oldest first
    ///
    /// # Errors
    /// Returns `SolverError::MalformedFeedback` if the board cannot be read
    /// into valid rows.
    fn read_board(&mut self) -> Result<Vec<BoardRow>, SolverError>;
}

/// Fold played rows into a single constraint
///
/// # Errors
/// Returns `SolverError::MalformedFeedback` if there are more rows than
/// guesses allowed.
pub fn fold_rows(rows: &[BoardRow]) -> Result<GameConstraint, SolverError> {
    if rows.len() > MAX_GUESSES {
        return Err(FeedbackError::TooManyRows(rows.len()).into());
    }

    Ok(rows
        .iter()
        .fold(GameConstraint::new(), |state, row| {
            state.combine(&row.constraint())
        }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn tiles<'a>(letters: &str, results: [&'a str; 5]) -> Vec<(char, &'a str)> {
        letters.chars().zip(results).collect()
    }

    #[test]
    fn tiles_match_simulated_feedback() {
        let row = BoardRow::from_tiles(
            0,
            &tiles("ARISE", ["absent", "present", "correct", "present", "correct"]),
        )
        .unwrap();

        assert_eq!(row, BoardRow::scored(word("arise"), &word("shire")));
        assert_eq!(
            row.constraint(),
            GameConstraint::evaluate(&word("arise"), &word("shire"))
        );
        assert!(!row.is_solved());
    }

    #[test]
    fn wrong_tile_count_is_rejected() {
        let err = BoardRow::from_tiles(2, &tiles("tire", ["absent"; 5])).unwrap_err();
        assert_eq!(
            err,
            SolverError::MalformedFeedback(FeedbackError::WrongTileCount { row: 2, count: 4 })
        );
    }

    #[test]
    fn unknown_result_is_rejected() {
        let err = BoardRow::from_tiles(
            1,
            &tiles("tired", ["absent", "tbd", "absent", "absent", "absent"]),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SolverError::MalformedFeedback(FeedbackError::UnknownResult { row: 1, .. })
        ));
    }

    #[test]
    fn non_letter_tile_is_rejected() {
        let err = BoardRow::from_tiles(0, &tiles("tir3d", ["absent"; 5])).unwrap_err();
        assert_eq!(
            err,
            SolverError::MalformedFeedback(FeedbackError::InvalidLetter {
                row: 0,
                letter: '3'
            })
        );
    }

    #[test]
    fn fold_rows_combines_every_row() {
        let solution = word("shire");
        let rows = vec![
            BoardRow::scored(word("tired"), &solution),
            BoardRow::scored(word("arise"), &solution),
        ];

        let expected = GameConstraint::evaluate(&word("tired"), &solution)
            .combine(&GameConstraint::evaluate(&word("arise"), &solution));
        assert_eq!(fold_rows(&rows).unwrap(), expected);
        assert_eq!(fold_rows(&[]).unwrap(), GameConstraint::new());
    }

    #[test]
    fn fold_rows_rejects_overfull_board() {
        let solution = word("shire");
        let rows = vec![BoardRow::scored(word("tired"), &solution); 7];
        assert_eq!(
            fold_rows(&rows),
            Err(SolverError::MalformedFeedback(FeedbackError::TooManyRows(7)))
        );
    }

    #[test]
    fn parse_history_entry() {
        let row = BoardRow::parse(0, "arise:-YGYG").unwrap();
        assert_eq!(row, BoardRow::scored(word("arise"), &word("shire")));

        let row = BoardRow::parse(1, " TIRED : ⬜🟨🟨🟨⬜ ").unwrap();
        assert_eq!(row, BoardRow::scored(word("tired"), &word("shire")));
    }

    #[test]
    fn parse_rejects_bad_entries() {
        assert!(matches!(
            BoardRow::parse(0, "arise"),
            Err(SolverError::MalformedFeedback(FeedbackError::InvalidPattern { row: 0, .. }))
        ));
        assert!(matches!(
            BoardRow::parse(3, "arise:GGXGG"),
            Err(SolverError::MalformedFeedback(FeedbackError::InvalidPattern { row: 3, .. }))
        ));
        assert!(matches!(
            BoardRow::parse(0, "ari:GGGGG"),
            Err(SolverError::InvalidWord(_))
        ));
    }

    #[test]
    fn solved_row() {
        let row = BoardRow::scored(word("shire"), &word("shire"));
        assert!(row.is_solved());
        assert!(row.pattern().is_perfect());
        assert!(row.constraint().is_solved());
    }
}
