//! Per-letter constraint state accumulated from feedback
//!
//! Every letter of the alphabet carries the positions where it is known to sit,
//! the positions where it is known not to sit, and bounds on how many times it
//! occurs. Feedback from one guess produces a small delta which is merged into
//! the running state with [`GameConstraint::combine`].
//!
//! Each letter packs into 16 bits for cache keys:
//!
//! ```text
//! 15   13 12   10 9        5 4        0
//! [ max ] [ min ] [excluded] [positions]
//! ```

use super::{
    ALPHABET_SIZE, Feedback, Pattern, WORD_LENGTH, Word, letter_rank, rank_letter,
};

/// Bitmask with bit `i` set for board position `i`
pub type PositionMask = u8;

const ALL_POSITIONS: PositionMask = (1 << WORD_LENGTH) - 1;
const MAX_COUNT: u8 = WORD_LENGTH as u8;

const POSITIONS_SHIFT: u16 = 0;
const EXCLUDED_SHIFT: u16 = 5;
const MIN_SHIFT: u16 = 10;
const MAX_SHIFT: u16 = 13;
const MASK_BITS: u16 = 0b1_1111;
const COUNT_BITS: u16 = 0b111;

/// Knowledge about a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterConstraint {
    positions: PositionMask,
    excluded: PositionMask,
    min: u8,
    max: u8,
}

impl LetterConstraint {
    /// Nothing known about the letter
    pub const UNCONSTRAINED: Self = Self {
        positions: 0,
        excluded: 0,
        min: 0,
        max: MAX_COUNT,
    };

    /// Positions confirmed to hold this letter
    #[inline]
    #[must_use]
    pub const fn positions(self) -> PositionMask {
        self.positions
    }

    /// Positions confirmed not to hold this letter
    #[inline]
    #[must_use]
    pub const fn excluded(self) -> PositionMask {
        self.excluded
    }

    /// Fewest occurrences the answer may contain
    #[inline]
    #[must_use]
    pub const fn min(self) -> u8 {
        self.min
    }

    /// Most occurrences the answer may contain
    #[inline]
    #[must_use]
    pub const fn max(self) -> u8 {
        self.max
    }

    /// True when feedback has touched this letter
    #[inline]
    #[must_use]
    pub const fn is_guessed(self) -> bool {
        self.positions != 0 || self.excluded != 0 || self.min != 0 || self.max != MAX_COUNT
    }

    /// Merge two pieces of knowledge about the same letter
    ///
    /// A green at a position wins over an exclusion of the same position.
    #[inline]
    #[must_use]
    pub fn combine(self, other: Self) -> Self {
        let positions = self.positions | other.positions;
        Self {
            positions,
            excluded: (self.excluded | other.excluded) & !positions,
            min: self.min.max(other.min),
            max: self.max.min(other.max),
        }
    }

    /// Check a word's positions of this letter against the constraint
    #[inline]
    #[must_use]
    pub const fn allows(self, mask: PositionMask) -> bool {
        let count = mask.count_ones() as u8;
        mask & self.positions == self.positions
            && mask & self.excluded == 0
            && count >= self.min
            && count <= self.max
    }

    /// Pack into 16 bits
    #[inline]
    #[must_use]
    pub const fn encode(self) -> u16 {
        ((self.max as u16) << MAX_SHIFT)
            | ((self.min as u16) << MIN_SHIFT)
            | ((self.excluded as u16) << EXCLUDED_SHIFT)
            | ((self.positions as u16) << POSITIONS_SHIFT)
    }

    /// Unpack from 16 bits
    #[inline]
    #[must_use]
    pub const fn decode(code: u16) -> Self {
        Self {
            positions: ((code >> POSITIONS_SHIFT) & MASK_BITS) as u8,
            excluded: ((code >> EXCLUDED_SHIFT) & MASK_BITS) as u8,
            min: ((code >> MIN_SHIFT) & COUNT_BITS) as u8,
            max: ((code >> MAX_SHIFT) & COUNT_BITS) as u8,
        }
    }
}

impl Default for LetterConstraint {
    fn default() -> Self {
        Self::UNCONSTRAINED
    }
}

/// Fixed-width packed form of a [`GameConstraint`], one code per letter
///
/// Equal keys mean equal constraints, independent of the order in which
/// guesses were applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConstraintKey([u16; ALPHABET_SIZE]);

impl ConstraintKey {
    /// Raw per-letter codes, `a` first
    #[must_use]
    pub const fn codes(&self) -> &[u16; ALPHABET_SIZE] {
        &self.0
    }

    /// Rebuild the constraint this key was produced from
    #[must_use]
    pub fn decode(&self) -> GameConstraint {
        GameConstraint::from_letters(self.0.map(LetterConstraint::decode))
    }
}

/// Accumulated knowledge about the answer of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameConstraint {
    letters: [LetterConstraint; ALPHABET_SIZE],
    // Bit `r` set when letter rank `r` has been guessed; derived from `letters`.
    guessed: u32,
}

impl GameConstraint {
    /// A game with no feedback yet
    #[must_use]
    pub const fn new() -> Self {
        Self {
            letters: [LetterConstraint::UNCONSTRAINED; ALPHABET_SIZE],
            guessed: 0,
        }
    }

    fn from_letters(letters: [LetterConstraint; ALPHABET_SIZE]) -> Self {
        let guessed = letters
            .iter()
            .enumerate()
            .filter(|(_, letter)| letter.is_guessed())
            .fold(0u32, |mask, (rank, _)| mask | (1 << rank));
        Self { letters, guessed }
    }

    /// Constraint delta produced by one row of feedback
    ///
    /// Greens pin their position and yellows exclude theirs; both raise the
    /// letter's minimum count. A gray excludes its position and caps the letter
    /// at the number of green and yellow copies in the same row.
    #[must_use]
    pub fn from_feedback(guess: &Word, feedback: &[Feedback; WORD_LENGTH]) -> Self {
        let mut letters = [LetterConstraint::UNCONSTRAINED; ALPHABET_SIZE];

        for (i, (&ch, &tile)) in guess.chars().iter().zip(feedback).enumerate() {
            let letter = &mut letters[letter_rank(ch)];
            match tile {
                Feedback::Correct => {
                    letter.positions |= 1 << i;
                    letter.min += 1;
                }
                Feedback::Present => {
                    letter.excluded |= 1 << i;
                    letter.min += 1;
                }
                Feedback::Absent => {}
            }
        }

        for (i, (&ch, &tile)) in guess.chars().iter().zip(feedback).enumerate() {
            if tile == Feedback::Absent {
                let letter = &mut letters[letter_rank(ch)];
                letter.excluded |= 1 << i;
                letter.max = letter.max.min(letter.min);
            }
        }

        Self::from_letters(letters)
    }

    /// Constraint delta learned by playing `guess` when `solution` is the answer
    ///
    /// # Examples
    /// ```
    /// use wordle_constraints::core::{GameConstraint, Word};
    ///
    /// let guess = Word::new("sheep").unwrap();
    /// let solution = Word::new("spied").unwrap();
    /// let delta = GameConstraint::evaluate(&guess, &solution);
    ///
    /// // One E is green, the other gray: exactly one E in the answer
    /// let e = delta.letter(b'e');
    /// assert_eq!((e.min(), e.max()), (1, 1));
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, solution: &Word) -> Self {
        Self::from_feedback(guess, &Pattern::calculate(guess, solution).feedback())
    }

    /// Merge two constraints letter by letter
    ///
    /// Commutative, associative and idempotent.
    #[must_use]
    pub fn combine(&self, other: &Self) -> Self {
        let mut letters = self.letters;
        for (letter, &theirs) in letters.iter_mut().zip(&other.letters) {
            *letter = letter.combine(theirs);
        }
        Self::from_letters(letters)
    }

    /// Knowledge about one lowercase letter
    #[inline]
    #[must_use]
    pub const fn letter(&self, letter: u8) -> LetterConstraint {
        self.letters[letter_rank(letter)]
    }

    /// Letters touched by feedback so far, alphabetical
    pub fn guessed_letters(&self) -> impl Iterator<Item = u8> + '_ {
        (0..ALPHABET_SIZE)
            .filter(|rank| self.guessed & (1 << rank) != 0)
            .map(rank_letter)
    }

    /// True before any feedback has been applied
    #[inline]
    #[must_use]
    pub const fn is_fresh(&self) -> bool {
        self.guessed == 0
    }

    /// Positions pinned by some letter
    #[must_use]
    pub fn solved_positions(&self) -> PositionMask {
        self.letters
            .iter()
            .fold(0, |mask, letter| mask | letter.positions)
    }

    /// True when every position has a confirmed letter
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solved_positions() == ALL_POSITIONS
    }

    /// Check whether `word` could still be the answer
    ///
    /// Only guessed letters are inspected; an untouched letter accepts anything.
    #[must_use]
    pub fn word_fits(&self, word: &Word) -> bool {
        let mut remaining = self.guessed;
        while remaining != 0 {
            let rank = remaining.trailing_zeros() as usize;
            remaining &= remaining - 1;
            if !self.letters[rank].allows(word.positions_of(rank_letter(rank))) {
                return false;
            }
        }
        true
    }

    /// Packed form used as a cache key
    #[must_use]
    pub fn encode(&self) -> ConstraintKey {
        ConstraintKey(self.letters.map(LetterConstraint::encode))
    }
}

impl Default for GameConstraint {
    fn default() -> Self {
        Self::new()
    }
}
