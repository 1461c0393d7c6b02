//! Formatting utilities for terminal output

use crate::core::Feedback;
use crate::game::BoardRow;
use colored::Colorize;

/// Render a board row as colored letter tiles
#[must_use]
pub fn tile_row(row: &BoardRow) -> String {
    row.word()
        .chars()
        .iter()
        .zip(row.feedback())
        .map(|(&ch, tile)| {
            let letter = format!(" {} ", char::from(ch).to_ascii_uppercase());
            match tile {
                Feedback::Correct => letter.black().on_green().to_string(),
                Feedback::Present => letter.black().on_yellow().to_string(),
                Feedback::Absent => letter.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a share in `[0, 1]` as a percentage with two decimals
#[must_use]
pub fn percent(share: f64) -> String {
    format!("{:.2}%", share * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn tile_row_shows_letters_in_order() {
        colored::control::set_override(false);
        let row = BoardRow::scored(Word::new("tired").unwrap(), &Word::new("shire").unwrap());
        assert_eq!(tile_row(&row), " T  I  R  E  D ");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn percent_rounds_to_two_places() {
        assert_eq!(percent(0.123_456), "12.35%");
        assert_eq!(percent(1.0), "100.00%");
    }
}
