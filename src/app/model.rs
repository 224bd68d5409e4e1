use ratatui::layout::Rect;

use crate::form::{Draft, Focus};
use crate::store::{Note, NoteId, NoteStore};
use crate::ui::layout::{board_layout, grid_columns, grid_total_rows, grid_visible_rows};
use crate::ui::viewport::Viewport;

/// Form mode, derived from the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// Nothing selected: submit adds a note.
    Idle,
    /// A note is open in the form: submit saves over it.
    Editing(NoteId),
}

/// Switches for behavior where the legacy board was ambiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardPolicy {
    /// Apply the blank-field check to Save as well as Add.
    pub validate_update: bool,
    /// Close the form when the note it is editing gets deleted.
    pub clear_selection_on_delete: bool,
}

impl Default for BoardPolicy {
    fn default() -> Self {
        Self {
            validate_update: false,
            clear_selection_on_delete: true,
        }
    }
}

/// The complete application state.
///
/// All state lives here - no global or scattered state.
#[derive(Debug)]
pub struct Model {
    /// Every note on the board, newest first
    pub store: NoteStore,
    /// Id of the note open in the form, if any
    pub selection: Option<NoteId>,
    /// Unsaved form text
    pub draft: Draft,
    /// Where typed keys go
    pub focus: Focus,
    /// Store index of the keyboard-highlighted card
    pub highlighted: Option<usize>,
    /// Grid scroll state, in card rows
    pub grid: Viewport,
    pub policy: BoardPolicy,
    /// Whether help overlay is visible
    pub help_visible: bool,
    /// Whether the app should quit
    pub should_quit: bool,
    width: u16,
    height: u16,
}

impl Model {
    /// Create a model for a terminal of `terminal_size` (columns, rows).
    pub fn new(store: NoteStore, terminal_size: (u16, u16)) -> Self {
        let mut model = Self {
            store,
            selection: None,
            draft: Draft::new(),
            focus: Focus::Title,
            highlighted: None,
            grid: Viewport::default(),
            policy: BoardPolicy::default(),
            help_visible: false,
            should_quit: false,
            width: terminal_size.0,
            height: terminal_size.1,
        };
        model.sync_grid();
        model
    }

    #[must_use]
    pub const fn with_policy(mut self, policy: BoardPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub const fn mode(&self) -> FormMode {
        match self.selection {
            Some(id) => FormMode::Editing(id),
            None => FormMode::Idle,
        }
    }

    /// Full terminal area the board is laid out in.
    pub const fn screen_area(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    /// Cards per grid row at the current width.
    pub fn grid_columns(&self) -> usize {
        grid_columns(board_layout(self.screen_area()).grid.width)
    }

    pub fn highlighted_note(&self) -> Option<&Note> {
        self.highlighted.and_then(|idx| self.store.notes().get(idx))
    }

    pub(super) const fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// Close the form: empty the draft and drop the selection.
    pub(super) fn clear_form(&mut self) {
        self.draft.clear();
        self.selection = None;
    }

    /// Recompute grid rows after the store or screen changed, and keep the
    /// highlight on an existing card that is scrolled into view.
    pub(super) fn sync_grid(&mut self) {
        let grid_area = board_layout(self.screen_area()).grid;
        let columns = grid_columns(grid_area.width);
        self.grid.resize(grid_visible_rows(grid_area.height));
        self.grid
            .set_total_rows(grid_total_rows(self.store.len(), columns));

        let len = self.store.len();
        self.highlighted = match self.highlighted {
            _ if len == 0 => None,
            Some(idx) => Some(idx.min(len - 1)),
            None if self.focus == Focus::Grid => Some(0),
            None => None,
        };
        if let Some(idx) = self.highlighted {
            self.grid.ensure_visible(idx / columns);
        }
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(NoteStore::default(), (80, 24))
    }
}
