//! Notes already rendered during one composition.

use ahash::AHashSet;

use crate::document::NoteId;

/// Set of note ids shared by the dictionary and snippet phases of a single
/// composition, so no note is rendered twice.
#[derive(Debug, Clone, Default)]
pub struct SeenNotes {
    ids: AHashSet<NoteId>,
}

impl SeenNotes {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a note. Returns `false` if it was already recorded.
    pub fn insert(&mut self, id: NoteId) -> bool {
        self.ids.insert(id)
    }

    /// Check whether a note was recorded.
    pub fn contains(&self, id: NoteId) -> bool {
        self.ids.contains(&id)
    }

    /// Check if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
