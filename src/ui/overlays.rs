use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use super::style;

pub fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_width = area.width.saturating_sub(12).max(48);
    let popup_height = area.height.saturating_sub(6).max(12);
    let popup = centered_popup_rect(popup_width, popup_height, area);

    let section_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::styled("Form", section_style),
        Line::raw("  Tab / Shift-Tab     Next / previous field"),
        Line::raw("  Enter (title)       Submit"),
        Line::raw("  Enter (content)     New line"),
        Line::raw("  Ctrl-s              Add note / save edit"),
        Line::raw("  Esc                 Cancel edit"),
        Line::raw(""),
        Line::styled("Notes", section_style),
        Line::raw("  h/j/k/l, arrows     Move between cards"),
        Line::raw("  Enter / Space       Edit card"),
        Line::raw("  d / x / Delete      Delete card"),
        Line::raw("  i / a               Back to the form"),
        Line::raw("  Click card / [x]    Edit / delete"),
        Line::raw(""),
        Line::styled("Other", section_style),
        Line::raw("  q / Ctrl-c          Quit"),
        Line::raw("  ? / F1              Toggle help"),
        Line::raw(""),
        Line::styled("Any key closes this window", style::dim()),
    ];

    let block = Block::default()
        .title("Help")
        .borders(Borders::ALL)
        .padding(Padding::uniform(1))
        .style(Style::default().bg(Color::Black).fg(Color::White));

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn centered_popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w) / 2);
    let y = area.y + (area.height.saturating_sub(h) / 2);
    Rect::new(x, y, w, h)
}
