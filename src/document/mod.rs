//! Note and card model.
//!
//! A [`Note`] is a record of a given note type holding an ordered list of
//! named text fields. Cards generated from a note are stored on the note
//! itself, so card lookups are always scoped to their owning note.

pub mod card;
#[allow(clippy::module_inception)]
pub mod document;
pub mod field;

pub use card::{Card, CardId};
pub use document::{Note, NoteBuilder, NoteId};
pub use field::NoteField;
