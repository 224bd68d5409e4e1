//! In-memory note storage.
//!
//! The [`NoteStore`] owns every [`Note`] on the board, newest first.
//! It is mutated only through [`NoteStore::add`], [`NoteStore::update`]
//! and [`NoteStore::delete`].

use thiserror::Error;

/// Identifier of a note, unique within a store's lifetime under
/// [`IdPolicy::Monotonic`].
pub type NoteId = u64;

/// A user-authored note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
}

/// How [`NoteStore::add`] assigns ids.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum IdPolicy {
    /// Counter starting at 1, never reused.
    #[default]
    Monotonic,
    /// `len + 1` at insertion time. Ids can repeat after deletions.
    Length,
}

/// Reasons a store operation was refused.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NoteError {
    #[error("note title is empty")]
    EmptyTitle,
    #[error("note content is empty")]
    EmptyContent,
    #[error("no note with id {0}")]
    NotFound(NoteId),
}

/// Ordered collection of notes, most recently added first.
///
/// # Example
///
/// ```
/// use noteboard::store::{IdPolicy, NoteStore};
///
/// let mut store = NoteStore::new(IdPolicy::Monotonic);
/// store.add("A", "1").unwrap();
/// store.add("B", "2").unwrap();
/// let titles: Vec<_> = store.notes().iter().map(|n| n.title.as_str()).collect();
/// assert_eq!(titles, ["B", "A"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteStore {
    notes: Vec<Note>,
    next_id: NoteId,
    id_policy: IdPolicy,
    revision: u64,
}

impl NoteStore {
    /// Create an empty store.
    pub const fn new(id_policy: IdPolicy) -> Self {
        Self {
            notes: Vec::new(),
            next_id: 1,
            id_policy,
            revision: 0,
        }
    }

    /// Check that both fields have visible text.
    ///
    /// # Errors
    ///
    /// Returns [`NoteError::EmptyTitle`] or [`NoteError::EmptyContent`]
    /// when the trimmed field is empty. Title is checked first.
    pub fn validate(title: &str, content: &str) -> Result<(), NoteError> {
        if title.trim().is_empty() {
            return Err(NoteError::EmptyTitle);
        }
        if content.trim().is_empty() {
            return Err(NoteError::EmptyContent);
        }
        Ok(())
    }

    /// Create a note and place it first.
    ///
    /// The text is stored as given; trimming only decides validity.
    ///
    /// # Errors
    ///
    /// Returns a validation error and leaves the store untouched when
    /// either field is blank.
    pub fn add(&mut self, title: &str, content: &str) -> Result<&Note, NoteError> {
        Self::validate(title, content)?;
        let id = self.assign_id();
        self.notes.insert(
            0,
            Note {
                id,
                title: title.to_string(),
                content: content.to_string(),
            },
        );
        self.revision += 1;
        tracing::debug!(id, len = self.notes.len(), "note added");
        Ok(&self.notes[0])
    }

    /// Replace the text of the note(s) with `id`, keeping position and id.
    ///
    /// No emptiness check is applied here.
    ///
    /// # Errors
    ///
    /// Returns [`NoteError::NotFound`] when no note has `id`.
    pub fn update(&mut self, id: NoteId, title: &str, content: &str) -> Result<(), NoteError> {
        let mut replaced = 0usize;
        for note in self.notes.iter_mut().filter(|note| note.id == id) {
            *note = Note {
                id,
                title: title.to_string(),
                content: content.to_string(),
            };
            replaced += 1;
        }
        if replaced == 0 {
            return Err(NoteError::NotFound(id));
        }
        self.revision += 1;
        tracing::debug!(id, replaced, "note updated");
        Ok(())
    }

    /// Remove the note(s) with `id`. Returns the number removed.
    pub fn delete(&mut self, id: NoteId) -> usize {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        let removed = before - self.notes.len();
        if removed > 0 {
            self.revision += 1;
            tracing::debug!(id, removed, len = self.notes.len(), "note deleted");
        }
        removed
    }

    /// First note with `id`.
    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Display position of the first note with `id`.
    pub fn position(&self, id: NoteId) -> Option<usize> {
        self.notes.iter().position(|note| note.id == id)
    }

    /// All notes in display order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub const fn len(&self) -> usize {
        self.notes.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Number of successful mutations so far.
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    fn assign_id(&mut self) -> NoteId {
        match self.id_policy {
            IdPolicy::Monotonic => {
                let id = self.next_id;
                self.next_id += 1;
                id
            }
            IdPolicy::Length => self.notes.len() as NoteId + 1,
        }
    }
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new(IdPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(store: &NoteStore) -> Vec<NoteId> {
        store.notes().iter().map(|n| n.id).collect()
    }

    #[test]
    fn test_add_places_new_note_first() {
        let mut store = NoteStore::default();
        store.add("A", "1").unwrap();
        store.add("B", "2").unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.notes()[0].title, "B");
        assert_eq!(ids(&store), vec![2, 1]);
    }

    #[test]
    fn test_add_rejects_blank_fields() {
        let mut store = NoteStore::default();
        assert_eq!(store.add("   ", "body").unwrap_err(), NoteError::EmptyTitle);
        assert_eq!(store.add("title", "\n\t ").unwrap_err(), NoteError::EmptyContent);
        assert_eq!(store.add("", "").unwrap_err(), NoteError::EmptyTitle);
        assert!(store.is_empty());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_add_keeps_text_untrimmed() {
        let mut store = NoteStore::default();
        let note = store.add("  padded ", " body\n").unwrap();
        assert_eq!(note.title, "  padded ");
        assert_eq!(note.content, " body\n");
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut store = NoteStore::default();
        store.add("A", "1").unwrap();
        store.add("B", "2").unwrap();
        store.add("C", "3").unwrap();

        store.update(2, "B2", "22").unwrap();

        assert_eq!(ids(&store), vec![3, 2, 1]);
        assert_eq!(
            store.get(2),
            Some(&Note {
                id: 2,
                title: "B2".to_string(),
                content: "22".to_string()
            })
        );
    }

    #[test]
    fn test_update_accepts_blank_text() {
        let mut store = NoteStore::default();
        store.add("A", "1").unwrap();
        store.update(1, "", " ").unwrap();
        assert_eq!(store.notes()[0].title, "");
    }

    #[test]
    fn test_update_missing_id_is_not_found() {
        let mut store = NoteStore::default();
        store.add("A", "1").unwrap();
        let before = store.clone();
        assert_eq!(store.update(9, "x", "y"), Err(NoteError::NotFound(9)));
        assert_eq!(store, before);
    }

    #[test]
    fn test_delete_preserves_order_of_rest() {
        let mut store = NoteStore::default();
        for (t, c) in [("A", "1"), ("B", "2"), ("C", "3"), ("D", "4")] {
            store.add(t, c).unwrap();
        }
        assert_eq!(store.delete(3), 1);
        assert_eq!(ids(&store), vec![4, 2, 1]);
    }

    #[test]
    fn test_delete_missing_id_is_noop() {
        let mut store = NoteStore::default();
        store.add("A", "1").unwrap();
        let revision = store.revision();
        assert_eq!(store.delete(42), 0);
        assert_eq!(store.len(), 1);
        assert_eq!(store.revision(), revision);
    }

    #[test]
    fn test_monotonic_ids_are_not_reused_after_delete() {
        let mut store = NoteStore::new(IdPolicy::Monotonic);
        store.add("A", "1").unwrap();
        store.add("B", "2").unwrap();
        store.delete(2);
        let id = store.add("C", "3").unwrap().id;
        assert_eq!(id, 3);
    }

    #[test]
    fn test_length_ids_repeat_after_delete() {
        let mut store = NoteStore::new(IdPolicy::Length);
        store.add("A", "1").unwrap();
        store.add("B", "2").unwrap();
        store.delete(1);
        // One note left, so the next id is 2 again.
        let id = store.add("C", "3").unwrap().id;
        assert_eq!(id, 2);
        assert_eq!(ids(&store), vec![2, 2]);

        store.update(2, "X", "x").unwrap();
        assert!(store.notes().iter().all(|n| n.title == "X"));
        assert_eq!(store.delete(2), 2);
        assert!(store.is_empty());
    }

    #[test]
    fn test_revision_counts_mutations() {
        let mut store = NoteStore::default();
        store.add("A", "1").unwrap();
        store.update(1, "A", "2").unwrap();
        store.delete(1);
        assert_eq!(store.revision(), 3);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn delete_keeps_relative_order(count in 1..40usize, victim in 0..40usize) {
                let mut store = NoteStore::default();
                for i in 0..count {
                    store.add(&format!("t{i}"), "c").unwrap();
                }
                let victim = victim % count;
                let target = store.notes()[victim].id;
                let mut expected = ids(&store);
                expected.remove(victim);

                prop_assert_eq!(store.delete(target), 1);
                prop_assert_eq!(ids(&store), expected);
            }

            #[test]
            fn monotonic_ids_stay_unique(ops in proptest::collection::vec(any::<bool>(), 0..60)) {
                let mut store = NoteStore::new(IdPolicy::Monotonic);
                for add in ops {
                    if add || store.is_empty() {
                        store.add("t", "c").unwrap();
                    } else {
                        let id = store.notes()[store.len() / 2].id;
                        store.delete(id);
                    }
                }
                let mut seen = ids(&store);
                seen.sort_unstable();
                seen.dedup();
                prop_assert_eq!(seen.len(), store.len());
            }
        }
    }
}
