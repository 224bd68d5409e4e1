//! Form state: the two draft fields and keyboard focus.
//!
//! Each field is a rope-backed [`TextBuffer`] with its own cursor, so
//! editing keys can be applied to whichever field has focus.

mod buffer;
mod draft;

pub(crate) use buffer::normalize_breaks;
pub use buffer::{Cursor, Direction, TextBuffer};
pub use draft::{Draft, Focus};
