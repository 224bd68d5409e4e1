use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::Frame;

use crate::app::{App, Message, Model};
use crate::form::{Direction, Focus};
use crate::ui::layout::{Hit, hit_test};

impl App {
    pub(super) fn handle_event(event: &Event, model: &Model) -> Option<Message> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => Self::handle_key(*key, model),
            Event::Mouse(mouse) => Self::handle_mouse(*mouse, model),
            Event::Paste(text) if model.focus.is_field() && !model.help_visible => {
                Some(Message::InsertText(text.clone()))
            }
            Event::Resize(w, h) => Some(Message::Resize(*w, *h)),
            _ => None,
        }
    }

    pub(super) fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
        if model.help_visible {
            return Some(Message::HideHelp);
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Bindings that work regardless of focus
        match key.code {
            KeyCode::Char('c') if ctrl => return Some(Message::Quit),
            KeyCode::Char('s') if ctrl => return Some(Message::Submit),
            KeyCode::Tab => return Some(Message::FocusNext),
            KeyCode::BackTab => return Some(Message::FocusPrev),
            KeyCode::F(1) => return Some(Message::ToggleHelp),
            KeyCode::Esc => {
                return if model.selection.is_some() {
                    Some(Message::Cancel)
                } else if model.focus.is_field() {
                    Some(Message::Focus(Focus::Grid))
                } else {
                    None
                };
            }
            _ => {}
        }

        match model.focus {
            Focus::Title | Focus::Content => Self::handle_field_key(key, model.focus),
            Focus::Grid => Self::handle_grid_key(key, model),
        }
    }

    fn handle_field_key(key: KeyEvent, focus: Focus) -> Option<Message> {
        match key.code {
            KeyCode::Enter if focus == Focus::Title => Some(Message::Submit),
            KeyCode::Enter => Some(Message::Newline),
            KeyCode::Backspace => Some(Message::DeleteBack),
            KeyCode::Delete => Some(Message::DeleteForward),
            KeyCode::Left => Some(Message::MoveCursor(Direction::Left)),
            KeyCode::Right => Some(Message::MoveCursor(Direction::Right)),
            KeyCode::Up => Some(Message::MoveCursor(Direction::Up)),
            KeyCode::Down => Some(Message::MoveCursor(Direction::Down)),
            KeyCode::Home => Some(Message::MoveHome),
            KeyCode::End => Some(Message::MoveEnd),
            KeyCode::Char(c)
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT) =>
            {
                Some(Message::InsertChar(c))
            }
            _ => None,
        }
    }

    fn handle_grid_key(key: KeyEvent, model: &Model) -> Option<Message> {
        match key.code {
            KeyCode::Char('h') | KeyCode::Left => Some(Message::GridMove(Direction::Left)),
            KeyCode::Char('l') | KeyCode::Right => Some(Message::GridMove(Direction::Right)),
            KeyCode::Char('k') | KeyCode::Up => Some(Message::GridMove(Direction::Up)),
            KeyCode::Char('j') | KeyCode::Down => Some(Message::GridMove(Direction::Down)),
            KeyCode::Enter | KeyCode::Char(' ') => model
                .highlighted_note()
                .map(|note| Message::ActivateNote(note.id)),
            KeyCode::Char('d' | 'x') | KeyCode::Delete => model
                .highlighted_note()
                .map(|note| Message::DeleteNote(note.id)),
            KeyCode::Char('i' | 'a') => Some(Message::Focus(Focus::Title)),
            KeyCode::Char('?') => Some(Message::ToggleHelp),
            KeyCode::Char('q') => Some(Message::Quit),
            _ => None,
        }
    }

    pub(super) fn handle_mouse(mouse: MouseEvent, model: &Model) -> Option<Message> {
        if model.help_visible {
            return matches!(mouse.kind, MouseEventKind::Up(MouseButton::Left))
                .then_some(Message::HideHelp);
        }

        match mouse.kind {
            MouseEventKind::ScrollDown if model.grid.can_scroll_down() => {
                Some(Message::GridScrollDown(1))
            }
            MouseEventKind::ScrollUp if model.grid.can_scroll_up() => {
                Some(Message::GridScrollUp(1))
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let hit = hit_test(
                    model.screen_area(),
                    model.mode(),
                    model.store.len(),
                    model.grid.offset(),
                    mouse.column,
                    mouse.row,
                )?;
                let note_id = |index: usize| model.store.notes().get(index).map(|note| note.id);
                match hit {
                    Hit::Title => Some(Message::Focus(Focus::Title)),
                    Hit::Content => Some(Message::Focus(Focus::Content)),
                    Hit::Submit => Some(Message::Submit),
                    Hit::Cancel => Some(Message::Cancel),
                    Hit::Card(index) => note_id(index).map(Message::ActivateNote),
                    Hit::DeleteCard(index) => note_id(index).map(Message::DeleteNote),
                }
            }
            _ => None,
        }
    }

    pub(super) fn view(model: &Model, frame: &mut Frame) {
        crate::ui::render(model, frame);
    }
}
