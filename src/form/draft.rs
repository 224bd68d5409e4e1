use crate::store::Note;

use super::buffer::TextBuffer;

/// Which part of the screen receives typed keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Title,
    Content,
    Grid,
}

impl Focus {
    pub const fn next(self) -> Self {
        match self {
            Self::Title => Self::Content,
            Self::Content => Self::Grid,
            Self::Grid => Self::Title,
        }
    }

    pub const fn prev(self) -> Self {
        match self {
            Self::Title => Self::Grid,
            Self::Content => Self::Title,
            Self::Grid => Self::Content,
        }
    }

    pub const fn is_field(self) -> bool {
        matches!(self, Self::Title | Self::Content)
    }
}

/// Unsaved form values, independent of the store.
#[derive(Debug, Clone)]
pub struct Draft {
    pub title: TextBuffer,
    pub content: TextBuffer,
}

impl Draft {
    pub fn new() -> Self {
        Self {
            title: TextBuffer::single_line(),
            content: TextBuffer::multi_line(),
        }
    }

    /// Copy a note's current text into both fields.
    pub fn load(&mut self, note: &Note) {
        self.title.set_text(&note.title);
        self.content.set_text(&note.content);
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.content.clear();
    }

    pub fn title_text(&self) -> String {
        self.title.text()
    }

    pub fn content_text(&self) -> String {
        self.content.text()
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.content.is_empty()
    }

    /// Whether either field was edited since it was loaded or cleared.
    pub const fn is_modified(&self) -> bool {
        self.title.is_dirty() || self.content.is_dirty()
    }

    /// The buffer behind a focused text field.
    pub const fn field_mut(&mut self, focus: Focus) -> Option<&mut TextBuffer> {
        match focus {
            Focus::Title => Some(&mut self.title),
            Focus::Content => Some(&mut self.content),
            Focus::Grid => None,
        }
    }
}

impl Default for Draft {
    fn default() -> Self {
        Self::new()
    }
}
