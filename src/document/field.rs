//! Named text fields of a note.

use serde::{Deserialize, Serialize};

/// A single named field of a note.
///
/// Field text is note HTML and is rendered as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteField {
    /// Field name as defined by the note type.
    pub name: String,
    /// Field content.
    pub value: String,
}

impl NoteField {
    /// Create a new field.
    pub fn new<S: Into<String>, T: Into<String>>(name: S, value: T) -> Self {
        NoteField {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Case-insensitive comparison of the whole field text.
    pub fn value_equals(&self, other: &str) -> bool {
        self.value.to_lowercase() == other.to_lowercase()
    }
}
