use crossterm::style::{Color, Stylize};

use crate::cli::SessionMode;

/// Color `text` for interactive sessions; batch output stays plain.
pub fn paint(text: &str, color: Color, mode: SessionMode) -> String {
    match mode {
        SessionMode::Interactive => text.with(color).to_string(),
        SessionMode::Batch => text.to_string(),
    }
}

/// Bold yellow-on-blue banner used for the company header line.
pub fn header(text: &str, mode: SessionMode) -> String {
    match mode {
        SessionMode::Interactive => text.with(Color::Yellow).on(Color::Blue).bold().to_string(),
        SessionMode::Batch => text.to_string(),
    }
}
