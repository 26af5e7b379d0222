//! Collaborators the lookup phases depend on.

use crate::document::{Note, NoteId};
use crate::error::Result;

/// A searchable note collection.
///
/// Implementations are read-only from the point of view of this crate.
/// Failures are returned as errors and propagate out of tooltip composition
/// unchanged.
pub trait Collection {
    /// Ids of notes matching the query string.
    fn find_notes(&self, query: &str) -> Result<Vec<NoteId>>;

    /// Fetch a note, including its cards.
    fn get_note(&self, id: NoteId) -> Result<Note>;
}

impl<C: Collection + ?Sized> Collection for &C {
    fn find_notes(&self, query: &str) -> Result<Vec<NoteId>> {
        (**self).find_notes(query)
    }

    fn get_note(&self, id: NoteId) -> Result<Note> {
        (**self).get_note(id)
    }
}

/// Access to the note currently under active review, if the host has one.
pub trait Reviewer {
    /// The reviewed note, or `None` outside of review.
    fn current_note_id(&self) -> Option<NoteId>;
}

/// A host without an active review session.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoReview;

impl Reviewer for NoReview {
    fn current_note_id(&self) -> Option<NoteId> {
        None
    }
}

impl Reviewer for Option<NoteId> {
    fn current_note_id(&self) -> Option<NoteId> {
        *self
    }
}

/// A blocking yes/no confirmation.
pub trait Prompt {
    /// Ask the user; `true` means proceed.
    fn confirm(&self, message: &str) -> bool;
}

/// A prompt that answers every question the same way.
#[derive(Debug, Clone, Copy)]
pub struct AutoAnswer(pub bool);

impl Prompt for AutoAnswer {
    fn confirm(&self, _message: &str) -> bool {
        self.0
    }
}

impl<F: Fn(&str) -> bool> Prompt for F {
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}
