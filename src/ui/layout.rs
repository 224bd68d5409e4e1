//! Screen geometry shared by rendering and mouse hit-testing.

use ratatui::layout::{Constraint, Layout, Position, Rect};

use crate::app::FormMode;

/// Height of the title input including its border.
pub const TITLE_HEIGHT: u16 = 3;
/// Text rows of the content area (border excluded).
pub const CONTENT_ROWS: u16 = 6;
pub const CARD_WIDTH: u16 = 28;
pub const CARD_HEIGHT: u16 = 7;

pub const DELETE_LABEL: &str = "[x]";
pub const ADD_LABEL: &str = "[ Add Note ]";
pub const SAVE_LABEL: &str = "[ Save ]";
pub const CANCEL_LABEL: &str = "[ Cancel ]";
const BUTTON_GAP: u16 = 2;

/// Top-level regions of the board screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub title: Rect,
    pub content: Rect,
    pub buttons: Rect,
    pub grid: Rect,
    pub status: Rect,
}

pub fn board_layout(area: Rect) -> BoardLayout {
    let [title, content, buttons, grid, status] = Layout::vertical([
        Constraint::Length(TITLE_HEIGHT),
        Constraint::Length(CONTENT_ROWS + 2),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);
    BoardLayout {
        title,
        content,
        buttons,
        grid,
        status,
    }
}

/// Clickable areas of the button row for the current mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonAreas {
    pub submit: Rect,
    pub cancel: Option<Rect>,
}

pub fn button_areas(row: Rect, mode: FormMode) -> ButtonAreas {
    let x = row.x.saturating_add(1);
    match mode {
        FormMode::Idle => ButtonAreas {
            submit: label_rect(row, x, ADD_LABEL),
            cancel: None,
        },
        FormMode::Editing(_) => {
            let submit = label_rect(row, x, SAVE_LABEL);
            let cancel_x = submit.right().saturating_add(BUTTON_GAP);
            ButtonAreas {
                submit,
                cancel: Some(label_rect(row, cancel_x, CANCEL_LABEL)),
            }
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn label_rect(row: Rect, x: u16, label: &str) -> Rect {
    Rect::new(x, row.y, label.chars().count() as u16, 1).intersection(row)
}

/// Cards per grid row for a given grid width (at least one).
pub fn grid_columns(width: u16) -> usize {
    usize::from(width / CARD_WIDTH).max(1)
}

/// Card rows that fit in the grid height (at least one, possibly clipped).
pub fn grid_visible_rows(height: u16) -> usize {
    usize::from(height / CARD_HEIGHT).max(1)
}

/// Number of card rows needed for `count` notes.
pub fn grid_total_rows(count: usize, columns: usize) -> usize {
    count.div_ceil(columns.max(1))
}

/// A card on screen and the store index it shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardArea {
    pub index: usize,
    pub rect: Rect,
}

impl CardArea {
    /// Where the delete affordance sits: the card's top border, right side.
    pub fn delete_rect(&self) -> Rect {
        delete_rect(self.rect)
    }
}

#[allow(clippy::cast_possible_truncation)]
pub fn delete_rect(card: Rect) -> Rect {
    let width = DELETE_LABEL.len() as u16;
    let x = card.right().saturating_sub(width + 1).max(card.x);
    Rect::new(x, card.y, width, 1).intersection(card)
}

/// Cards visible in `grid` when the first shown row is `offset_row`.
#[allow(clippy::cast_possible_truncation)]
pub fn card_areas(grid: Rect, count: usize, offset_row: usize) -> Vec<CardArea> {
    if grid.is_empty() || count == 0 {
        return Vec::new();
    }
    let columns = grid_columns(grid.width);
    let rows = grid_visible_rows(grid.height);
    let mut cards = Vec::new();
    for screen_row in 0..rows {
        for col in 0..columns {
            let index = (offset_row + screen_row) * columns + col;
            if index >= count {
                return cards;
            }
            let rect = Rect::new(
                grid.x + col as u16 * CARD_WIDTH,
                grid.y + screen_row as u16 * CARD_HEIGHT,
                CARD_WIDTH,
                CARD_HEIGHT,
            )
            .intersection(grid);
            if !rect.is_empty() {
                cards.push(CardArea { index, rect });
            }
        }
    }
    cards
}

/// What a mouse click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Title,
    Content,
    Submit,
    Cancel,
    Card(usize),
    DeleteCard(usize),
}

/// Resolve a screen position to a board element.
///
/// The delete affordance is checked before the card body so a click on it
/// never counts as a click on the card.
pub fn hit_test(
    area: Rect,
    mode: FormMode,
    count: usize,
    offset_row: usize,
    column: u16,
    row: u16,
) -> Option<Hit> {
    let pos = Position::new(column, row);
    let layout = board_layout(area);
    if layout.title.contains(pos) {
        return Some(Hit::Title);
    }
    if layout.content.contains(pos) {
        return Some(Hit::Content);
    }
    if layout.buttons.contains(pos) {
        let buttons = button_areas(layout.buttons, mode);
        if buttons.submit.contains(pos) {
            return Some(Hit::Submit);
        }
        if buttons.cancel.is_some_and(|cancel| cancel.contains(pos)) {
            return Some(Hit::Cancel);
        }
        return None;
    }
    card_areas(layout.grid, count, offset_row)
        .into_iter()
        .find(|card| card.rect.contains(pos))
        .map(|card| {
            if card.delete_rect().contains(pos) {
                Hit::DeleteCard(card.index)
            } else {
                Hit::Card(card.index)
            }
        })
}
