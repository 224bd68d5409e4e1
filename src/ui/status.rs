use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{FormMode, Model};
use crate::form::Focus;

use super::style;

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    frame.render_widget(
        Paragraph::new(status_text(model)).style(style::status_bar(model.selection.is_some())),
        area,
    );
}

pub(super) fn status_text(model: &Model) -> String {
    let count = model.store.len();
    let noun = if count == 1 { "note" } else { "notes" };
    let mode = match model.mode() {
        FormMode::Idle => "adding".to_string(),
        FormMode::Editing(id) => {
            let modified = if model.draft.is_modified() {
                " [modified]"
            } else {
                ""
            };
            format!("editing #{id}{modified}")
        }
    };
    let hints = match (model.mode(), model.focus) {
        (FormMode::Editing(_), _) => "Ctrl-S:save  Esc:cancel",
        (FormMode::Idle, Focus::Grid) => "Enter:edit  d:delete  i:write",
        (FormMode::Idle, _) => "Ctrl-S:add  Tab:focus",
    };
    format!(" noteboard  {count} {noun}  {mode}  {hints}  F1:help")
}
