use crate::app::Model;
use crate::app::model::FormMode;
use crate::form::{Direction, Focus};
use crate::store::{NoteId, NoteStore};

/// All possible events and actions in the application.
///
/// These represent user input, system events, and internal actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Form editing (applies to the focused field)
    /// Insert a character at the cursor
    InsertChar(char),
    /// Insert pasted text at the cursor
    InsertText(String),
    /// Break the line (content field only)
    Newline,
    /// Delete character before cursor (Backspace)
    DeleteBack,
    /// Delete character at cursor (Delete)
    DeleteForward,
    /// Move cursor in a direction
    MoveCursor(Direction),
    /// Move cursor to beginning of line (Home)
    MoveHome,
    /// Move cursor to end of line (End)
    MoveEnd,

    // Focus
    FocusNext,
    FocusPrev,
    Focus(Focus),

    // Board
    /// Add a note (Idle) or save the selected one (Editing)
    Submit,
    /// Close the form without touching the store
    Cancel,
    /// Open a note in the form
    ActivateNote(NoteId),
    /// Remove a note
    DeleteNote(NoteId),

    // Grid
    /// Move the highlighted card
    GridMove(Direction),
    GridScrollUp(usize),
    GridScrollDown(usize),

    // Window
    /// Toggle help overlay
    ToggleHelp,
    /// Hide help overlay
    HideHelp,
    /// Terminal resized
    Resize(u16, u16),

    // Application
    /// Quit the application
    Quit,
}

/// Pure function that updates the model based on a message.
///
/// This is the core of TEA - all state transitions happen here.
/// No side effects should occur in this function.
pub fn update(mut model: Model, msg: Message) -> Model {
    tracing::trace!(?msg, mode = ?model.mode(), "update");
    let revision = model.store.revision();

    match msg {
        Message::InsertChar(ch) => {
            if let Some(field) = model.draft.field_mut(model.focus) {
                field.insert_char(ch);
            }
        }
        Message::InsertText(text) => {
            if let Some(field) = model.draft.field_mut(model.focus) {
                field.insert_str(&text);
            }
        }
        Message::Newline => {
            if let Some(field) = model.draft.field_mut(model.focus) {
                field.split_line();
            }
        }
        Message::DeleteBack => {
            if let Some(field) = model.draft.field_mut(model.focus) {
                field.delete_back();
            }
        }
        Message::DeleteForward => {
            if let Some(field) = model.draft.field_mut(model.focus) {
                field.delete_forward();
            }
        }
        Message::MoveCursor(direction) => {
            if let Some(field) = model.draft.field_mut(model.focus) {
                field.move_cursor(direction);
            }
        }
        Message::MoveHome => {
            if let Some(field) = model.draft.field_mut(model.focus) {
                field.move_home();
            }
        }
        Message::MoveEnd => {
            if let Some(field) = model.draft.field_mut(model.focus) {
                field.move_end();
            }
        }

        Message::FocusNext => {
            let focus = model.focus.next();
            set_focus(&mut model, focus);
        }
        Message::FocusPrev => {
            let focus = model.focus.prev();
            set_focus(&mut model, focus);
        }
        Message::Focus(focus) => set_focus(&mut model, focus),

        Message::Submit => submit(&mut model),
        Message::Cancel => {
            if let FormMode::Editing(id) = model.mode() {
                tracing::debug!(id, "edit cancelled");
                model.clear_form();
                model.focus = Focus::Title;
            }
        }
        Message::ActivateNote(id) => {
            if let Some(note) = model.store.get(id) {
                model.draft.load(note);
                model.selection = Some(id);
                model.highlighted = model.store.position(id);
                model.focus = Focus::Title;
                tracing::debug!(id, "note activated");
            }
        }
        Message::DeleteNote(id) => {
            let removed = model.store.delete(id);
            if removed > 0
                && model.selection == Some(id)
                && model.policy.clear_selection_on_delete
            {
                model.clear_form();
            }
        }

        Message::GridMove(direction) => move_highlight(&mut model, direction),
        Message::GridScrollUp(n) => model.grid.scroll_up(n),
        Message::GridScrollDown(n) => model.grid.scroll_down(n),

        Message::ToggleHelp => model.help_visible = !model.help_visible,
        Message::HideHelp => model.help_visible = false,
        Message::Resize(width, height) => {
            model.resize(width, height);
            model.sync_grid();
        }

        Message::Quit => model.should_quit = true,
    }

    if model.store.revision() != revision {
        model.sync_grid();
    }
    model
}

fn set_focus(model: &mut Model, focus: Focus) {
    model.focus = focus;
    if focus == Focus::Grid && model.highlighted.is_none() && !model.store.is_empty() {
        model.highlighted = Some(0);
        model.sync_grid();
    }
}

fn submit(model: &mut Model) {
    let title = model.draft.title_text();
    let content = model.draft.content_text();
    match model.mode() {
        FormMode::Idle => match model.store.add(&title, &content) {
            Ok(_) => {
                model.draft.clear();
                if model.highlighted.is_some() {
                    model.highlighted = Some(0);
                }
                model.focus = Focus::Title;
            }
            Err(err) => tracing::debug!(%err, "add ignored"),
        },
        FormMode::Editing(id) => {
            if model.policy.validate_update
                && let Err(err) = NoteStore::validate(&title, &content)
            {
                tracing::debug!(id, %err, "save ignored");
                return;
            }
            if let Err(err) = model.store.update(id, &title, &content) {
                tracing::debug!(id, %err, "save found no note");
            }
            model.clear_form();
            model.focus = Focus::Title;
        }
    }
}

fn move_highlight(model: &mut Model, direction: Direction) {
    let len = model.store.len();
    if len == 0 {
        return;
    }
    let columns = model.grid_columns();
    let current = model.highlighted.unwrap_or(0).min(len - 1);
    let next = match direction {
        Direction::Left => current.saturating_sub(1),
        Direction::Right => (current + 1).min(len - 1),
        Direction::Up => current.checked_sub(columns).unwrap_or(current),
        Direction::Down => {
            let below = current + columns;
            if below < len { below } else { current }
        }
    };
    model.highlighted = Some(next);
    model.grid.ensure_visible(next / columns);
}
