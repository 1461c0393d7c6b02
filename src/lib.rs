//! Wordle Constraints
//!
//! A Wordle solver that folds every row of feedback into per-letter
//! constraints and picks the candidate expected to leave the fewest words.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_constraints::core::{GameConstraint, Word};
//! use wordle_constraints::solver::Solver;
//! use wordle_constraints::wordlists::{SOLUTIONS, loader::words_from_slice};
//!
//! let solutions = words_from_slice(SOLUTIONS);
//! let solver = Solver::new(&solutions, &solutions);
//!
//! // Fold the feedback of two guesses against SHIRE
//! let target = Word::new("shire").unwrap();
//! let state = GameConstraint::evaluate(&Word::new("tired").unwrap(), &target)
//!     .combine(&GameConstraint::evaluate(&Word::new("arise").unwrap(), &target));
//!
//! assert_eq!(solver.candidates(&state).texts(), ["shire", "spire"]);
//! assert_eq!(solver.choose_guess(&state).unwrap().text(), "shire");
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Candidate filtering, scoring and the game loop
pub mod solver;

// Board reader and guess dispatcher seams
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
