//! In-memory collection for tests, benchmarks and the CLI.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::debug;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::collection::traits::Collection;
use crate::document::{Note, NoteId};
use crate::error::{PopdictError, Result};
use crate::query::{MatchContext, QueryParser};

const DEFAULT_DECK: &str = "Default";

/// On-disk layout of a collection snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CollectionFile {
    #[serde(default = "default_deck")]
    current_deck: String,
    #[serde(default)]
    notes: Vec<Note>,
}

fn default_deck() -> String {
    DEFAULT_DECK.to_string()
}

#[derive(Debug)]
struct Inner {
    notes: BTreeMap<NoteId, Note>,
    current_deck: String,
}

/// A collection held entirely in memory.
///
/// Notes are kept ordered by id, so search results come back ascending.
#[derive(Debug)]
pub struct MemoryCollection {
    inner: RwLock<Inner>,
    parser: QueryParser,
}

impl Default for MemoryCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryCollection {
    /// Create an empty collection whose current deck is `Default`.
    pub fn new() -> Self {
        MemoryCollection {
            inner: RwLock::new(Inner {
                notes: BTreeMap::new(),
                current_deck: default_deck(),
            }),
            parser: QueryParser::new(),
        }
    }

    /// Create a collection from notes.
    pub fn with_notes<I: IntoIterator<Item = Note>>(notes: I) -> Self {
        let collection = Self::new();
        for note in notes {
            collection.add_note(note);
        }
        collection
    }

    /// Parse a JSON collection snapshot.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: CollectionFile = serde_json::from_str(json)?;
        let collection = Self::with_notes(file.notes);
        collection.set_current_deck(file.current_deck);
        Ok(collection)
    }

    /// Load a JSON collection snapshot from disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Insert or replace a note.
    pub fn add_note(&self, note: Note) {
        self.inner.write().notes.insert(note.id, note);
    }

    /// Set the deck that `deck:current` refers to.
    pub fn set_current_deck<S: Into<String>>(&self, deck: S) {
        self.inner.write().current_deck = deck.into();
    }

    /// The deck that `deck:current` refers to.
    pub fn current_deck(&self) -> String {
        self.inner.read().current_deck.clone()
    }

    /// Number of notes.
    pub fn len(&self) -> usize {
        self.inner.read().notes.len()
    }

    /// Check if the collection has no notes.
    pub fn is_empty(&self) -> bool {
        self.inner.read().notes.is_empty()
    }
}

impl Collection for MemoryCollection {
    fn find_notes(&self, query: &str) -> Result<Vec<NoteId>> {
        let parsed = self.parser.parse(query)?;
        let inner = self.inner.read();
        let ctx = MatchContext {
            current_deck: &inner.current_deck,
        };

        let ids: Vec<NoteId> = inner
            .notes
            .values()
            .filter(|note| parsed.matches(note, &ctx))
            .map(|note| note.id)
            .collect();
        debug!("memory collection: {} matches for {:?}", ids.len(), query);
        Ok(ids)
    }

    fn get_note(&self, id: NoteId) -> Result<Note> {
        self.inner
            .read()
            .notes
            .get(&id)
            .cloned()
            .ok_or(PopdictError::NoteNotFound(id))
    }
}
