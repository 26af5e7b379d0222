//! Evaluation of parsed queries against notes.

use crate::document::Note;
use crate::query::{Occur, Predicate, SearchQuery};

/// Collection state a query is evaluated against.
#[derive(Debug, Clone)]
pub struct MatchContext<'a> {
    /// Deck that `deck:current` refers to.
    pub current_deck: &'a str,
}

impl SearchQuery {
    /// Check whether a note satisfies every clause.
    pub fn matches(&self, note: &Note, ctx: &MatchContext<'_>) -> bool {
        self.clauses().iter().all(|clause| {
            let hit = predicate_matches(&clause.predicate, note, ctx);
            match clause.occur {
                Occur::Must => hit,
                Occur::MustNot => !hit,
            }
        })
    }
}

fn predicate_matches(predicate: &Predicate, note: &Note, ctx: &MatchContext<'_>) -> bool {
    match predicate {
        Predicate::Text(text) => {
            let needle = text.to_lowercase();
            note.fields()
                .iter()
                .any(|f| f.value.to_lowercase().contains(&needle))
        }
        Predicate::NoteIds(ids) => ids.contains(&note.id),
        Predicate::CurrentDeck => in_deck(note, ctx.current_deck),
        Predicate::Deck(deck) => in_deck(note, deck),
        Predicate::NoteType(name) => note.note_type.to_lowercase() == name.to_lowercase(),
        Predicate::Field { name, value } => note
            .fields()
            .iter()
            .filter(|f| f.name.to_lowercase() == name.to_lowercase())
            .any(|f| f.value_equals(value)),
    }
}

fn in_deck(note: &Note, deck: &str) -> bool {
    let deck = deck.to_lowercase();
    let child_prefix = format!("{deck}::");
    note.cards().iter().any(|card| {
        let card_deck = card.deck.to_lowercase();
        card_deck == deck || card_deck.starts_with(&child_prefix)
    })
}
