//! Collaborators the driver talks to
//!
//! A [`BoardReader`] reports real feedback and a [`GuessDispatcher`] types the
//! chosen guess. [`SimulatedGame`] plays both roles against a known solution.

mod board;
mod dispatch;
mod simulated;

pub use board::{BoardReader, BoardRow, fold_rows};
pub use dispatch::{GuessDispatcher, KeyInput, key_inputs};
pub use simulated::SimulatedGame;
