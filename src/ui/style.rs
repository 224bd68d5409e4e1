//! Colors and text styles for the board.
//!
//! Uses ANSI colors so the terminal's own palette decides the look.

use ratatui::style::{Color, Modifier, Style};

/// Border of a text field; focused fields stand out.
pub fn field_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Border of a note card.
///
/// The note open in the form wins over the keyboard highlight.
pub fn card_border(selected: bool, highlighted: bool) -> Style {
    if selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else if highlighted {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

pub fn card_title() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

pub fn delete_button() -> Style {
    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
}

pub fn submit_button() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Green)
        .add_modifier(Modifier::BOLD)
}

pub fn cancel_button() -> Style {
    Style::default().fg(Color::Black).bg(Color::Gray)
}

/// Placeholder and hint text.
pub fn dim() -> Style {
    Style::default().fg(Color::Indexed(245))
}

pub fn status_bar(editing: bool) -> Style {
    if editing {
        Style::default().bg(Color::Magenta).fg(Color::White)
    } else {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_card_beats_highlight() {
        assert_eq!(card_border(true, true), card_border(true, false));
        assert_ne!(card_border(false, true), card_border(false, false));
    }

    #[test]
    fn test_focused_field_border_differs() {
        assert_ne!(field_border(true), field_border(false));
    }
}
