//! Word lists for Wordle solving
//!
//! SOLUTIONS are the words that can be the answer. EXTRA_GUESSES are accepted
//! as guesses but never the answer. Both are compiled into the binary.

mod embedded;
pub mod loader;

pub use embedded::{EXTRA_GUESSES, EXTRA_GUESSES_COUNT, SOLUTIONS, SOLUTIONS_COUNT};
