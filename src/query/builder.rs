//! Query string construction.
//!
//! Builds the search strings sent to a [`Collection`](crate::collection::Collection):
//! the snippet query (`"term" -nid:1 -nid:2 deck:current`) and the
//! per-dictionary lookup query (`note:"Dictionary" Term:"term"`).

use crate::document::NoteId;

/// Characters that must be backslash-escaped inside a query token.
const SPECIAL_CHARS: [char; 3] = ['\\', '"', ':'];

/// Escape a raw string for use inside a quoted query token.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if SPECIAL_CHARS.contains(&ch) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Quote a raw term as a free-text search token.
pub fn quote(term: &str) -> String {
    format!("\"{}\"", escape(term))
}

/// Token excluding a single note.
pub fn exclude_note_token(nid: NoteId) -> String {
    format!("-nid:{nid}")
}

/// Token restricting results to the current deck.
pub const CURRENT_DECK_TOKEN: &str = "deck:current";

/// Field-equality token. Field names containing whitespace or starting with
/// `-` are quoted as a whole, so the token stays a single non-negated word.
pub fn field_token(field: &str, value: &str) -> String {
    if field.starts_with('-') || field.chars().any(char::is_whitespace) {
        format!("\"{}:{}\"", escape(field), escape(value))
    } else {
        format!("{}:{}", escape(field), quote(value))
    }
}

/// Builds the free-text query used by snippet search.
///
/// Token order is term, current-note exclusion, caller exclusion, deck
/// restriction. The predicates are independent, so order only affects
/// readability.
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    term: String,
    exclusions: Vec<String>,
}

impl QueryBuilder {
    /// Start a query for the given term.
    pub fn new<S: Into<String>>(term: S) -> Self {
        QueryBuilder {
            term: term.into(),
            exclusions: Vec::new(),
        }
    }

    /// Exclude the note currently under review, if there is one.
    pub fn exclude_current(mut self, nid: Option<NoteId>) -> Self {
        if let Some(nid) = nid {
            self.exclusions.push(exclude_note_token(nid));
        }
        self
    }

    /// Exclude a note explicitly named by the caller, if any.
    pub fn exclude(self, nid: Option<NoteId>) -> Self {
        self.exclude_current(nid)
    }

    /// Restrict results to the current deck when enabled.
    pub fn limit_to_current_deck(mut self, enabled: bool) -> Self {
        if enabled {
            self.exclusions.push(CURRENT_DECK_TOKEN.to_string());
        }
        self
    }

    /// The exclusion tokens collected so far, in order.
    pub fn exclusion_tokens(&self) -> &[String] {
        &self.exclusions
    }

    /// Produce the query string.
    pub fn build(&self) -> String {
        let mut tokens = Vec::with_capacity(self.exclusions.len() + 1);
        tokens.push(quote(&self.term));
        tokens.extend(self.exclusions.iter().cloned());
        tokens.join(" ")
    }
}

/// Query locating the entry for `term` in one dictionary note type.
pub fn dictionary_query(note_type: &str, term_field: &str, term: &str) -> String {
    format!("note:{} {}", quote(note_type), field_token(term_field, term))
}
