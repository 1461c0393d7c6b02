//! Word list loading utilities
//!
//! Load word lists from files or convert the embedded constants, and build the
//! combined list of valid guesses.

use crate::core::Word;
use log::debug;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Blank lines and entries that are not five ASCII letters are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_constraints::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/solutions.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let mut skipped = 0;
    let words = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let word = Word::new(line).ok();
            if word.is_none() {
                skipped += 1;
            }
            word
        })
        .collect::<Vec<_>>();

    debug!(
        "loaded {} words from {} ({skipped} skipped)",
        words.len(),
        path.display()
    );
    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_constraints::wordlists::loader::words_from_slice;
/// use wordle_constraints::wordlists::SOLUTIONS;
///
/// let words = words_from_slice(SOLUTIONS);
/// assert_eq!(words.len(), SOLUTIONS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Every word that may be guessed: solutions first, then the extra guesses
///
/// Later duplicates are dropped, so order is otherwise preserved.
#[must_use]
pub fn valid_guesses(solutions: &[Word], extra: &[Word]) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    solutions
        .iter()
        .chain(extra)
        .filter(|&word| seen.insert(word.text()))
        .cloned()
        .collect()
}
