use ratatui::layout::Margin;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph, Wrap};
use unicode_width::UnicodeWidthChar;

use crate::app::{FormMode, Model};
use crate::form::{Focus, TextBuffer, normalize_breaks};
use crate::store::Note;

use super::layout::{
    ADD_LABEL, BoardLayout, CANCEL_LABEL, CardArea, DELETE_LABEL, SAVE_LABEL, board_layout,
    button_areas, card_areas,
};
use super::{overlays, status, style};

/// Render the complete UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();
    let layout = board_layout(area);

    render_field(
        frame,
        layout.title,
        " Title ",
        "Title",
        &model.draft.title,
        model.focus == Focus::Title && !model.help_visible,
    );
    render_field(
        frame,
        layout.content,
        " Content ",
        "Content",
        &model.draft.content,
        model.focus == Focus::Content && !model.help_visible,
    );
    render_buttons(model, frame, &layout);
    render_grid(model, frame, layout.grid);
    status::render_status_bar(model, frame, layout.status);

    if model.help_visible {
        overlays::render_help_overlay(frame, area);
    }
}

fn render_field(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    placeholder: &str,
    buffer: &TextBuffer,
    focused: bool,
) {
    let block = Block::bordered()
        .title(title)
        .border_style(style::field_border(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.is_empty() {
        return;
    }

    if buffer.is_empty() {
        frame.render_widget(Paragraph::new(placeholder).style(style::dim()), inner);
        if focused {
            frame.set_cursor_position((inner.x, inner.y));
        }
        return;
    }

    let rows = usize::from(inner.height);
    let cursor = buffer.cursor();
    let first = cursor.line.saturating_sub(rows.saturating_sub(1));
    let mut cursor_x = 0usize;
    let lines: Vec<Line> = (first..buffer.line_count().min(first + rows))
        .map(|idx| {
            let text = buffer.line_at(idx).unwrap_or_default();
            if idx == cursor.line {
                let (shown, x) =
                    scroll_to_cursor(&text, buffer.cursor_display_col(), usize::from(inner.width));
                cursor_x = x;
                Line::raw(shown)
            } else {
                Line::raw(text)
            }
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);

    if focused {
        #[allow(clippy::cast_possible_truncation)]
        let position = (
            inner.x + cursor_x as u16,
            inner.y + (cursor.line - first) as u16,
        );
        frame.set_cursor_position(position);
    }
}

/// Drop leading characters until the cursor column fits in `width`.
///
/// Returns the visible text and the cursor's column within it.
pub(super) fn scroll_to_cursor(line: &str, cursor_col: usize, width: usize) -> (String, usize) {
    if width == 0 {
        return (String::new(), 0);
    }
    let mut skipped = 0usize;
    let mut start = 0usize;
    for (i, ch) in line.char_indices() {
        if cursor_col.saturating_sub(skipped) < width {
            break;
        }
        skipped += ch.width().unwrap_or(0);
        start = i + ch.len_utf8();
    }
    (line[start..].to_string(), cursor_col.saturating_sub(skipped))
}

fn render_buttons(model: &Model, frame: &mut Frame, layout: &BoardLayout) {
    let areas = button_areas(layout.buttons, model.mode());
    let submit_label = match model.mode() {
        FormMode::Idle => ADD_LABEL,
        FormMode::Editing(_) => SAVE_LABEL,
    };
    frame.render_widget(
        Paragraph::new(submit_label).style(style::submit_button()),
        areas.submit,
    );
    if let Some(cancel) = areas.cancel {
        frame.render_widget(
            Paragraph::new(CANCEL_LABEL).style(style::cancel_button()),
            cancel,
        );
    }
}

fn render_grid(model: &Model, frame: &mut Frame, area: Rect) {
    if area.is_empty() {
        return;
    }
    let notes = model.store.notes();
    if notes.is_empty() {
        let hint = Paragraph::new("No notes yet. Fill in a title and content, then Ctrl-S.")
            .style(style::dim())
            .wrap(Wrap { trim: true });
        frame.render_widget(hint, area.inner(Margin::new(1, 1)));
        return;
    }

    let grid_focused = model.focus == Focus::Grid;
    for card in card_areas(area, notes.len(), model.grid.offset()) {
        let note = &notes[card.index];
        let selected = model.selection == Some(note.id);
        let highlighted = grid_focused && model.highlighted == Some(card.index);
        render_card(frame, note, card, selected, highlighted);
    }
}

fn render_card(frame: &mut Frame, note: &Note, card: CardArea, selected: bool, highlighted: bool) {
    let block = Block::bordered()
        .title(format!(" #{} ", note.id))
        .border_style(style::card_border(selected, highlighted));
    let inner = block.inner(card.rect);
    frame.render_widget(block, card.rect);

    let content = normalize_breaks(&note.content, false);
    let mut lines = vec![Line::styled(
        normalize_breaks(&note.title, true),
        style::card_title(),
    )];
    lines.extend(content.lines().map(Line::raw));
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);

    frame.render_widget(
        Paragraph::new(DELETE_LABEL).style(style::delete_button()),
        card.delete_rect(),
    );
}
