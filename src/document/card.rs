//! Cards generated from a note.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub i64);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A renderable view of a note at a given template ordinal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Card identifier.
    pub id: CardId,
    /// Template ordinal, starting at 0.
    pub ord: u32,
    /// Deck the card currently lives in.
    #[serde(default = "default_deck")]
    pub deck: String,
}

fn default_deck() -> String {
    "Default".to_string()
}

impl Card {
    /// Create a card in the default deck.
    pub fn new(id: i64, ord: u32) -> Self {
        Card {
            id: CardId(id),
            ord,
            deck: default_deck(),
        }
    }

    /// Move the card into the given deck.
    pub fn in_deck<S: Into<String>>(mut self, deck: S) -> Self {
        self.deck = deck.into();
        self
    }
}
