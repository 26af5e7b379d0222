//! Query construction, parsing and matching.
//!
//! [`builder`] produces the query strings the lookup phases send to a
//! collection. [`parser`] and [`matcher`] implement the same grammar for the
//! in-memory reference collection.

pub mod builder;
pub mod matcher;
pub mod parser;

pub use builder::{QueryBuilder, dictionary_query, quote};
pub use matcher::MatchContext;
pub use parser::QueryParser;

use crate::document::NoteId;

/// Whether a clause must or must not match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occur {
    /// The clause must match.
    Must,
    /// The clause must not match.
    MustNot,
}

/// A single search predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Case-insensitive substring of any field.
    Text(String),
    /// Note id is one of the listed ids.
    NoteIds(Vec<NoteId>),
    /// Some card of the note is in the current deck.
    CurrentDeck,
    /// Some card of the note is in the named deck or one of its children.
    Deck(String),
    /// Note type name, case-insensitive.
    NoteType(String),
    /// Whole-field equality, case-insensitive on both name and value.
    Field { name: String, value: String },
}

/// A predicate with its occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub occur: Occur,
    pub predicate: Predicate,
}

impl Clause {
    /// A clause that must match.
    pub fn must(predicate: Predicate) -> Self {
        Clause {
            occur: Occur::Must,
            predicate,
        }
    }

    /// A clause that must not match.
    pub fn must_not(predicate: Predicate) -> Self {
        Clause {
            occur: Occur::MustNot,
            predicate,
        }
    }
}

/// A parsed query: the conjunction of its clauses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    clauses: Vec<Clause>,
}

impl SearchQuery {
    /// Create a query from clauses.
    pub fn new(clauses: Vec<Clause>) -> Self {
        SearchQuery { clauses }
    }

    /// The clauses of this query.
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }
}
