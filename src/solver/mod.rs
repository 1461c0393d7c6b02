//! Constraint-based guess selection
//!
//! Candidates are filtered from the solution list through a per-session cache,
//! guesses are scored by how many candidates they are expected to leave, and
//! the driver plays whole games through the collaborators in [`crate::game`].

mod cache;
mod driver;
mod engine;
mod filter;
mod scorer;
mod selector;

pub use cache::{CandidateCache, CandidateIndices};
pub use driver::{GameOutcome, GameReport, Turn, play, play_simulated};
pub use engine::{GuessPool, Solver};
pub use filter::{CandidateFilter, Candidates, filter_words};
pub use scorer::{GuessScore, expected_remaining};
pub use selector::{OPENING_GUESSES, rank_guesses, score_pool, select_best_guess, sort_scores};
