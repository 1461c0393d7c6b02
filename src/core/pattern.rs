//! Wordle feedback pattern calculation and representation
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = Gray (letter not in word)
//! - 1 = Yellow (letter in word, wrong position)
//! - 2 = Green (letter in correct position)
//!
//! The pattern is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total.

use super::{ALPHABET_SIZE, WORD_LENGTH, Word, letter_rank};

/// Result of a single tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Letter is not in the answer, or every copy is already accounted for (gray)
    Absent,
    /// Letter is in the answer at another position (yellow)
    Present,
    /// Letter is in the answer at this position (green)
    Correct,
}

impl Feedback {
    /// Parse a board tile result name: `correct`, `present` or `absent`
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "correct" => Some(Self::Correct),
            "present" => Some(Self::Present),
            "absent" => Some(Self::Absent),
            _ => None,
        }
    }

    /// Name used by the game board for this result
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        }
    }

    const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }

    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Correct,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }
}

/// Feedback pattern for a Wordle guess
///
/// Represents the colored feedback as a single byte value.
/// Value range: 0-242 (3^5 - 1 = 243 possible patterns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern(u8);

impl Pattern {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Create a new pattern from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "Pattern value must be < 243");
        Self(value)
    }

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Calculate the pattern when `guess` is guessed and `answer` is the target
    ///
    /// Greens are marked first; the answer's remaining letters are then handed
    /// out left to right as yellows, so a repeated guess letter never earns more
    /// markers than the answer holds.
    ///
    /// # Examples
    /// ```
    /// use wordle_constraints::core::{Word, Pattern};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// let pattern = Pattern::calculate(&guess, &answer);
    ///
    /// // C(gray) R(gray) A(green) N(gray) E(green)
    /// // 0 + 0×3 + 2×9 + 0×27 + 2×81 = 180
    /// assert_eq!(pattern.value(), 180);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut result = [Feedback::Absent; WORD_LENGTH];
        let mut owed = [0u8; ALPHABET_SIZE];

        for (i, (&g, &a)) in guess.chars().iter().zip(answer.chars()).enumerate() {
            if g == a {
                result[i] = Feedback::Correct;
            } else {
                owed[letter_rank(a)] += 1;
            }
        }

        for (i, &g) in guess.chars().iter().enumerate() {
            if result[i] == Feedback::Correct {
                continue;
            }
            let remaining = &mut owed[letter_rank(g)];
            if *remaining > 0 {
                result[i] = Feedback::Present;
                *remaining -= 1;
            }
        }

        Self::from_feedback(&result)
    }

    /// Build a pattern from per-tile feedback
    #[must_use]
    pub fn from_feedback(feedback: &[Feedback; WORD_LENGTH]) -> Self {
        let mut pattern = 0u8;
        let mut multiplier = 1u8;
        for tile in feedback {
            pattern += tile.digit() * multiplier;
            multiplier = multiplier.wrapping_mul(3);
        }
        Self(pattern)
    }

    /// Per-tile feedback, position 0 first
    #[must_use]
    pub fn feedback(self) -> [Feedback; WORD_LENGTH] {
        let mut tiles = [Feedback::Absent; WORD_LENGTH];
        let mut val = self.0;
        for tile in &mut tiles {
            *tile = Feedback::from_digit(val % 3);
            val /= 3;
        }
        tiles
    }

    /// Count the number of green feedback squares
    #[must_use]
    pub fn count_greens(self) -> usize {
        self.feedback()
            .iter()
            .filter(|&&tile| tile == Feedback::Correct)
            .count()
    }

    /// Parse a pattern from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for green
    /// - 'Y'/'y'/🟨 for yellow
    /// - '-'/'_'/'.'/⬜/⬛ for gray
    ///
    /// # Examples
    /// ```
    /// use wordle_constraints::core::Pattern;
    ///
    /// let p1 = Pattern::from_str("GY-GY").unwrap();
    /// let p2 = Pattern::from_str("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.trim().chars().collect();

        if chars.len() != WORD_LENGTH {
            return None;
        }

        let mut tiles = [Feedback::Absent; WORD_LENGTH];
        for (tile, ch) in tiles.iter_mut().zip(chars) {
            *tile = match ch {
                'G' | 'g' | '🟩' => Feedback::Correct,
                'Y' | 'y' | '🟨' => Feedback::Present,
                '-' | '_' | '.' | '⬜' | '⬛' => Feedback::Absent,
                _ => return None,
            };
        }

        Some(Self::from_feedback(&tiles))
    }

    /// Convert pattern to emoji string
    ///
    /// # Examples
    /// ```
    /// use wordle_constraints::core::Pattern;
    ///
    /// let p = Pattern::from_str("GY-GY").unwrap();
    /// assert_eq!(p.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.feedback()
            .iter()
            .map(|tile| match tile {
                Feedback::Correct => '🟩',
                Feedback::Present => '🟨',
                Feedback::Absent => '⬜',
            })
            .collect()
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiles(guess: &str, answer: &str) -> [Feedback; WORD_LENGTH] {
        Pattern::calculate(&Word::new(guess).unwrap(), &Word::new(answer).unwrap()).feedback()
    }

    #[test]
    fn pattern_perfect_constant() {
        assert_eq!(Pattern::PERFECT.value(), 242);
        assert!(Pattern::PERFECT.is_perfect());
        assert_eq!(Pattern::PERFECT.count_greens(), 5);
    }

    #[test]
    fn pattern_all_gray() {
        let pattern =
            Pattern::calculate(&Word::new("abcde").unwrap(), &Word::new("fghij").unwrap());
        assert_eq!(pattern.value(), 0);
        assert_eq!(pattern.count_greens(), 0);
    }

    #[test]
    fn pattern_all_green() {
        let word = Word::new("crane").unwrap();
        assert_eq!(Pattern::calculate(&word, &word), Pattern::PERFECT);
    }

    #[test]
    fn pattern_duplicate_guess_letter_single_in_answer() {
        use Feedback::{Absent, Correct, Present};

        // SHEEP vs SPIED: only one E in the answer, taken by the green
        assert_eq!(
            tiles("sheep", "spied"),
            [Correct, Absent, Absent, Correct, Present]
        );
        // GEESE vs CREEP: two E's in the answer, the third copy is gray
        assert_eq!(
            tiles("geese", "creep"),
            [Absent, Present, Correct, Absent, Absent]
        );
    }

    #[test]
    fn pattern_duplicate_letters_complex() {
        // ROBOT vs FLOOR: R(yellow) O(yellow) B(gray) O(green) T(gray)
        let pattern =
            Pattern::calculate(&Word::new("robot").unwrap(), &Word::new("floor").unwrap());
        assert_eq!(pattern.value(), 58);
        assert_eq!(pattern.count_greens(), 1);
    }

    #[test]
    fn pattern_feedback_round_trip() {
        let pattern = Pattern::new(133);
        assert_eq!(Pattern::from_feedback(&pattern.feedback()), pattern);
    }

    #[test]
    fn pattern_from_str_valid() {
        let p1 = Pattern::from_str("GYG--").unwrap();
        let p2 = Pattern::from_str("🟩🟨🟩⬜⬜").unwrap();
        let p3 = Pattern::from_str("gyg__").unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1.value(), 23);
    }

    #[test]
    fn pattern_from_str_invalid() {
        assert!(Pattern::from_str("GYGGYX").is_none());
        assert!(Pattern::from_str("GYG").is_none());
        assert!(Pattern::from_str("GXGGY").is_none());
        assert!(Pattern::from_str("").is_none());
    }

    #[test]
    fn feedback_names() {
        assert_eq!(Feedback::from_name("correct"), Some(Feedback::Correct));
        assert_eq!(Feedback::from_name("Present"), Some(Feedback::Present));
        assert_eq!(Feedback::from_name(" absent "), Some(Feedback::Absent));
        assert_eq!(Feedback::from_name("tbd"), None);
        assert_eq!(Feedback::Present.name(), "present");
    }
}
