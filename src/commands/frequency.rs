//! Letter frequency analysis
//!
//! Counts how often each letter appears over a word list, overall and per
//! position, and ranks words by how common their letters are.

use crate::core::{ALPHABET_SIZE, WORD_LENGTH, Word, letter_rank, rank_letter};

/// How often one letter occurs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterCount {
    pub letter: char,
    pub count: usize,
    /// `count` over the relevant total
    pub share: f64,
}

/// A word with a frequency score
#[derive(Debug, Clone, PartialEq)]
pub struct WordScore {
    pub word: String,
    pub score: f64,
}

/// Result of a frequency analysis
#[derive(Debug, Clone)]
pub struct FrequencyReport {
    pub total_words: usize,
    pub total_letters: usize,
    /// Every letter occurrence, as a share of all letters
    pub letters: Vec<LetterCount>,
    /// Words containing the letter at least once, as a share of all words
    pub at_least_once: Vec<LetterCount>,
    /// Letters at each position, as a share of all words
    pub by_position: [Vec<LetterCount>; WORD_LENGTH],
    /// Likelihood of green tiles: sum over positions of the share of words
    /// with the same letter there
    pub position_scores: Vec<WordScore>,
    /// Likelihood of green or yellow tiles: sum over distinct letters of the
    /// share of words containing them
    pub letter_scores: Vec<WordScore>,
}

type Counts = [usize; ALPHABET_SIZE];

/// Analyze `words`, keeping the `top` best words for each score
///
/// # Examples
/// ```
/// use wordle_constraints::commands::analyze_frequencies;
/// use wordle_constraints::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "crate", "slate"]);
/// let report = analyze_frequencies(&words, 2);
///
/// assert_eq!(report.total_letters, 15);
/// assert_eq!(report.letters[0].letter, 'a');
/// assert_eq!(report.position_scores[0].word, "crate");
/// ```
#[must_use]
pub fn analyze_frequencies(words: &[Word], top: usize) -> FrequencyReport {
    let mut overall: Counts = [0; ALPHABET_SIZE];
    let mut deduped: Counts = [0; ALPHABET_SIZE];
    let mut positional: [Counts; WORD_LENGTH] = [[0; ALPHABET_SIZE]; WORD_LENGTH];

    for word in words {
        for (position, &ch) in word.chars().iter().enumerate() {
            let rank = letter_rank(ch);
            positional[position][rank] += 1;
            overall[rank] += 1;
        }
        for (rank, seen) in deduped.iter_mut().enumerate() {
            if word.has_letter(rank_letter(rank)) {
                *seen += 1;
            }
        }
    }

    let total_words = words.len();
    let total_letters = total_words * WORD_LENGTH;
    let share = |count: usize, total: usize| {
        if total == 0 {
            0.0
        } else {
            count as f64 / total as f64
        }
    };

    let mut position_scores = Vec::with_capacity(total_words);
    let mut letter_scores = Vec::with_capacity(total_words);
    for word in words {
        let position_score = word
            .chars()
            .iter()
            .enumerate()
            .map(|(position, &ch)| share(positional[position][letter_rank(ch)], total_words))
            .sum();
        let letter_score = (0..ALPHABET_SIZE)
            .filter(|&rank| word.has_letter(rank_letter(rank)))
            .map(|rank| share(deduped[rank], total_words))
            .sum();

        position_scores.push(WordScore {
            word: word.text().to_string(),
            score: position_score,
        });
        letter_scores.push(WordScore {
            word: word.text().to_string(),
            score: letter_score,
        });
    }

    FrequencyReport {
        total_words,
        total_letters,
        letters: distribution(&overall, total_letters),
        at_least_once: distribution(&deduped, total_words),
        by_position: positional.map(|counts| distribution(&counts, total_words)),
        position_scores: top_scores(position_scores, top),
        letter_scores: top_scores(letter_scores, top),
    }
}

/// Letters that occur at all, most frequent first, ties alphabetical
fn distribution(counts: &Counts, total: usize) -> Vec<LetterCount> {
    let mut letters: Vec<LetterCount> = counts
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count > 0)
        .map(|(rank, &count)| LetterCount {
            letter: char::from(rank_letter(rank)),
            count,
            share: count as f64 / total as f64,
        })
        .collect();
    letters.sort_by(|a, b| b.count.cmp(&a.count));
    letters
}

/// Highest scores first; equal scores keep list order
fn top_scores(mut scores: Vec<WordScore>, top: usize) -> Vec<WordScore> {
    scores.sort_by(|a, b| b.score.total_cmp(&a.score));
    scores.truncate(top);
    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::SOLUTIONS;
    use crate::wordlists::loader::words_from_slice;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn counts_letters_overall_and_once() {
        let words = words_from_slice(&["sheep", "speed", "crane"]);
        let report = analyze_frequencies(&words, 10);

        let e = report.letters.iter().find(|l| l.letter == 'e').unwrap();
        assert_eq!(e.count, 5);
        assert!(approx(e.share, 5.0 / 15.0));

        let e_once = report.at_least_once.iter().find(|l| l.letter == 'e').unwrap();
        assert_eq!(e_once.count, 3);
        assert!(approx(e_once.share, 1.0));

        assert_eq!(report.letters[0].letter, 'e');
        assert!(report.letters.iter().all(|l| l.letter != 'z'));
    }

    #[test]
    fn per_position_distribution() {
        let words = words_from_slice(&["sheep", "speed", "crane"]);
        let report = analyze_frequencies(&words, 10);

        let first = &report.by_position[0];
        assert_eq!(first[0].letter, 's');
        assert_eq!(first[0].count, 2);
        assert!(approx(first[0].share, 2.0 / 3.0));
        assert_eq!(first[1].letter, 'c');
    }

    #[test]
    fn scores_rank_common_letters_first() {
        let words = words_from_slice(&["crane", "crate", "slate"]);
        let report = analyze_frequencies(&words, 3);

        // crate: c 2/3, r 2/3, a 3/3, t 2/3, e 3/3
        let crate_score = &report.position_scores[0];
        assert_eq!(crate_score.word, "crate");
        assert!(approx(crate_score.score, 4.0));

        // Distinct letters only: sheep counts its e once
        let words = words_from_slice(&["sheep", "shape"]);
        let report = analyze_frequencies(&words, 2);
        let sheep = report.letter_scores.iter().find(|s| s.word == "sheep").unwrap();
        // s, h, e, p all appear in both words
        assert!(approx(sheep.score, 4.0));
    }

    #[test]
    fn top_limits_scores() {
        let words = words_from_slice(SOLUTIONS);
        let report = analyze_frequencies(&words, 20);

        assert_eq!(report.total_words, SOLUTIONS.len());
        assert_eq!(report.position_scores.len(), 20);
        assert_eq!(report.letter_scores.len(), 20);
        assert!(
            report
                .letter_scores
                .windows(2)
                .all(|w| w[0].score >= w[1].score)
        );
        let total: usize = report.letters.iter().map(|l| l.count).sum();
        assert_eq!(total, report.total_letters);
    }

    #[test]
    fn empty_list() {
        let report = analyze_frequencies(&[], 5);
        assert_eq!(report.total_words, 0);
        assert!(report.letters.is_empty());
        assert!(report.position_scores.is_empty());
    }
}
