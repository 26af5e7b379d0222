//! Note structure.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::document::card::Card;
use crate::document::field::NoteField;
use crate::error::PopdictError;

/// Unique identifier of a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(pub i64);

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = PopdictError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(NoteId)
            .map_err(|_| PopdictError::invalid_argument(format!("not a note id: {s:?}")))
    }
}

impl From<i64> for NoteId {
    fn from(id: i64) -> Self {
        NoteId(id)
    }
}

/// A note: a record of some note type with ordered, named text fields.
///
/// Field order is the note type's schema order and is preserved when the
/// note is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Note identifier.
    pub id: NoteId,
    /// Name of the note type this note was created from.
    pub note_type: String,
    /// Fields in schema order.
    #[serde(default)]
    fields: Vec<NoteField>,
    /// Cards generated from this note.
    #[serde(default)]
    cards: Vec<Card>,
}

impl Note {
    /// Create a new note without fields or cards.
    pub fn new<S: Into<String>>(id: NoteId, note_type: S) -> Self {
        Note {
            id,
            note_type: note_type.into(),
            fields: Vec::new(),
            cards: Vec::new(),
        }
    }

    /// Create a builder for constructing notes.
    pub fn builder<S: Into<String>>(id: i64, note_type: S) -> NoteBuilder {
        NoteBuilder::new(NoteId(id), note_type)
    }

    /// Append a field. A field with the same name is replaced in place.
    pub fn set_field<S: Into<String>, T: Into<String>>(&mut self, name: S, value: T) {
        let field = NoteField::new(name, value);
        match self.fields.iter_mut().find(|f| f.name == field.name) {
            Some(existing) => existing.value = field.value,
            None => self.fields.push(field),
        }
    }

    /// Get the text of a field by name.
    pub fn get_field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }

    /// All fields in schema order.
    pub fn fields(&self) -> &[NoteField] {
        &self.fields
    }

    /// Iterate over `(name, value)` pairs in schema order.
    pub fn items(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|f| (f.name.as_str(), f.value.as_str()))
    }

    /// Attach a card to this note.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Cards generated from this note.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The card at the given template ordinal, if any.
    pub fn card_at(&self, ord: u32) -> Option<&Card> {
        self.cards.iter().find(|c| c.ord == ord)
    }
}

/// A builder for constructing notes in a fluent manner.
#[derive(Debug)]
pub struct NoteBuilder {
    note: Note,
}

impl NoteBuilder {
    /// Create a new note builder.
    pub fn new<S: Into<String>>(id: NoteId, note_type: S) -> Self {
        NoteBuilder {
            note: Note::new(id, note_type),
        }
    }

    /// Add a text field.
    pub fn field<S: Into<String>, T: Into<String>>(mut self, name: S, value: T) -> Self {
        self.note.set_field(name, value);
        self
    }

    /// Add a card in the default deck.
    pub fn card(mut self, id: i64, ord: u32) -> Self {
        self.note.add_card(Card::new(id, ord));
        self
    }

    /// Add a card in the given deck.
    pub fn card_in<S: Into<String>>(mut self, id: i64, ord: u32, deck: S) -> Self {
        self.note.add_card(Card::new(id, ord).in_deck(deck));
        self
    }

    /// Build the final note.
    pub fn build(self) -> Note {
        self.note
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_keep_insertion_order() {
        let note = Note::builder(1, "Basic")
            .field("Front", "a")
            .field("Back", "b")
            .field("Notes", "c")
            .build();

        let names: Vec<&str> = note.items().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Front", "Back", "Notes"]);
    }

    #[test]
    fn test_set_field_replaces_in_place() {
        let mut note = Note::builder(1, "Basic")
            .field("Front", "a")
            .field("Back", "b")
            .build();
        note.set_field("Front", "z");

        assert_eq!(note.get_field("Front"), Some("z"));
        assert_eq!(note.fields()[0].name, "Front");
        assert_eq!(note.fields().len(), 2);
    }

    #[test]
    fn test_card_at() {
        let note = Note::builder(1, "Basic").card(11, 1).card(10, 0).build();

        assert_eq!(note.card_at(0).map(|c| c.id.0), Some(10));
        assert!(note.card_at(2).is_none());
    }

    #[test]
    fn test_note_id_from_str() {
        assert_eq!("123".parse::<NoteId>().unwrap(), NoteId(123));
        assert!("abc".parse::<NoteId>().is_err());
    }

    #[test]
    fn test_note_deserializes_from_json() {
        let json = r#"{
            "id": 7,
            "noteType": "Dictionary",
            "fields": [{"name": "Term", "value": "cat"}],
            "cards": [{"id": 70, "ord": 0}]
        }"#;
        let note: Note = serde_json::from_str(json).unwrap();

        assert_eq!(note.id, NoteId(7));
        assert_eq!(note.get_field("Term"), Some("cat"));
        assert_eq!(note.cards()[0].deck, "Default");
    }
}
