//! Snippet search over the rest of the collection.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::cloze::strip_cloze;
use crate::document::NoteId;
use crate::error::Result;
use crate::lookup::LookupContext;
use crate::lookup::seen::SeenNotes;
use crate::query::QueryBuilder;
use crate::render;

/// Result of a snippet search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnippetOutcome {
    /// The query matched no notes at all.
    NoMatches,
    /// The result set was too large and the user declined to show it.
    Declined,
    /// Rendered snippets. May be empty when every match was already shown.
    Found(Vec<String>),
}

/// Serializable summary of a [`SnippetOutcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnippetStatus {
    /// Snippet search did not run.
    Disabled,
    /// The query matched no notes.
    NoMatches,
    /// The user declined an oversized result set.
    Declined,
    /// Snippet search rendered this many blocks.
    Found,
}

impl SnippetOutcome {
    /// Summary used in reports.
    pub fn status(&self) -> SnippetStatus {
        match self {
            SnippetOutcome::NoMatches => SnippetStatus::NoMatches,
            SnippetOutcome::Declined => SnippetStatus::Declined,
            SnippetOutcome::Found(_) => SnippetStatus::Found,
        }
    }
}

/// Build the snippet query for `term`.
///
/// Excludes the note under review (if the host reports one) and the
/// caller-supplied note, and applies the current-deck restriction when
/// configured.
pub fn snippet_query(ctx: &LookupContext<'_>, term: &str, ignore_nid: Option<NoteId>) -> String {
    QueryBuilder::new(term)
        .exclude_current(ctx.reviewer.current_note_id())
        .exclude(ignore_nid)
        .limit_to_current_deck(ctx.config.snippets_limit_to_current_deck)
        .build()
}

/// Find and render notes mentioning `term`.
///
/// Matches are processed in ascending id order. Notes already in `seen`
/// are skipped; rendered notes are added to it.
pub fn search_snippets(
    ctx: &LookupContext<'_>,
    term: &str,
    ignore_nid: Option<NoteId>,
    seen: &mut SeenNotes,
) -> Result<SnippetOutcome> {
    let query = snippet_query(ctx, term, ignore_nid);
    debug!("snippet query: {query}");

    let mut matches = ctx.collection.find_notes(&query)?;
    matches.sort_unstable();
    debug!("snippet query matched {} notes", matches.len());

    if matches.is_empty() {
        return Ok(SnippetOutcome::NoMatches);
    }

    if ctx.config.exceeds_warn_limit(matches.len()) {
        let message = render::result_count_warning(matches.len());
        if !ctx.prompt.confirm(&message) {
            info!("user declined to render {} snippets", matches.len());
            return Ok(SnippetOutcome::Declined);
        }
    }

    let mut blocks = Vec::with_capacity(matches.len());
    for nid in matches {
        if !seen.insert(nid) {
            debug!("note {nid} already rendered, skipping snippet");
            continue;
        }

        let note = ctx.collection.get_note(nid)?;
        let fields: String = note
            .items()
            .filter(|(name, _)| !ctx.config.is_field_excluded(name))
            .map(|(_, value)| render::field(value))
            .collect();
        blocks.push(render::snippet(nid, &strip_cloze(&fields)));
    }

    Ok(SnippetOutcome::Found(blocks))
}

#[cfg(test)]
mod tests {
    use parking_lot::Mutex;

    use super::*;
    use crate::collection::{AutoAnswer, MemoryCollection, NoReview};
    use crate::config::PopupConfig;
    use crate::document::Note;

    fn collection() -> MemoryCollection {
        MemoryCollection::with_notes([
            Note::builder(3, "Basic")
                .field("Front", "{{c1::cat::animal}} food")
                .field("Back", "b")
                .field("Notes", "c")
                .card_in(30, 0, "Pets")
                .build(),
            Note::builder(1, "Basic")
                .field("Front", "a cat")
                .field("Back", "b")
                .card(10, 0)
                .build(),
            Note::builder(2, "Basic").field("Front", "dog").card(20, 0).build(),
        ])
    }

    #[test]
    fn test_query_includes_all_exclusions() {
        let collection = collection();
        let config = PopupConfig::default().with_limit_to_current_deck(true);
        let reviewing = Some(NoteId(7));
        let ctx = LookupContext::new(&collection, &config, &reviewing, &AutoAnswer(true));

        assert_eq!(
            snippet_query(&ctx, "cat", Some(NoteId(8))),
            r#""cat" -nid:7 -nid:8 deck:current"#
        );
    }

    #[test]
    fn test_sorted_and_cloze_stripped() {
        let collection = collection();
        let config = PopupConfig::default();
        let ctx = LookupContext::new(&collection, &config, &NoReview, &AutoAnswer(true));
        let mut seen = SeenNotes::new();

        let SnippetOutcome::Found(blocks) = search_snippets(&ctx, "cat", None, &mut seen).unwrap()
        else {
            panic!("expected snippets");
        };

        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].contains("data-nid=1"));
        assert!(blocks[1].contains("data-nid=3"));
        assert!(blocks[1].contains(r#"<div class="tt-fld">cat food</div>"#));
        assert!(!blocks[1].contains("{{c1::"));
    }

    #[test]
    fn test_excluded_fields() {
        let collection = collection();
        let config = PopupConfig::default().with_excluded_fields(["Notes"]);
        let ctx = LookupContext::new(&collection, &config, &NoReview, &AutoAnswer(true));
        let mut seen = SeenNotes::new();

        let outcome = search_snippets(&ctx, "food", None, &mut seen).unwrap();
        let SnippetOutcome::Found(blocks) = outcome else {
            panic!("expected snippets");
        };

        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].contains(r#"<div class="tt-fld">b</div>"#));
        assert!(!blocks[0].contains(r#"<div class="tt-fld">c</div>"#));
    }

    #[test]
    fn test_reviewed_and_ignored_notes_are_excluded() {
        let collection = collection();
        let config = PopupConfig::default();
        let reviewing = Some(NoteId(1));
        let ctx = LookupContext::new(&collection, &config, &reviewing, &AutoAnswer(true));
        let mut seen = SeenNotes::new();

        let outcome = search_snippets(&ctx, "cat", Some(NoteId(3)), &mut seen).unwrap();
        assert_eq!(outcome, SnippetOutcome::NoMatches);
    }

    #[test]
    fn test_seen_notes_are_skipped() {
        let collection = collection();
        let config = PopupConfig::default();
        let ctx = LookupContext::new(&collection, &config, &NoReview, &AutoAnswer(true));
        let mut seen = SeenNotes::new();
        seen.insert(NoteId(1));
        seen.insert(NoteId(3));

        let outcome = search_snippets(&ctx, "cat", None, &mut seen).unwrap();
        assert_eq!(outcome, SnippetOutcome::Found(Vec::new()));
    }

    #[test]
    fn test_gate_prompts_with_count() {
        let collection = collection();
        let config = PopupConfig::default().with_warn_limit(1);
        let asked = Mutex::new(Vec::new());
        let prompt = |message: &str| {
            asked.lock().push(message.to_string());
            false
        };
        let ctx = LookupContext::new(&collection, &config, &NoReview, &prompt);
        let mut seen = SeenNotes::new();

        let outcome = search_snippets(&ctx, "cat", None, &mut seen).unwrap();

        assert_eq!(outcome, SnippetOutcome::Declined);
        assert!(seen.is_empty());
        let asked = asked.lock();
        assert_eq!(asked.len(), 1);
        assert!(asked[0].starts_with("<b>2</b> relevant notes found."));
    }

    #[test]
    fn test_gate_accepted() {
        let collection = collection();
        let config = PopupConfig::default().with_warn_limit(1);
        let ctx = LookupContext::new(&collection, &config, &NoReview, &AutoAnswer(true));
        let mut seen = SeenNotes::new();

        let outcome = search_snippets(&ctx, "cat", None, &mut seen).unwrap();
        assert!(matches!(outcome, SnippetOutcome::Found(ref blocks) if blocks.len() == 2));
    }

    #[test]
    fn test_gate_disabled() {
        let collection = collection();
        let config = PopupConfig::default().with_warn_limit(0);
        let ctx = LookupContext::new(&collection, &config, &NoReview, &AutoAnswer(false));
        let mut seen = SeenNotes::new();

        let outcome = search_snippets(&ctx, "cat", None, &mut seen).unwrap();
        assert!(matches!(outcome, SnippetOutcome::Found(ref blocks) if blocks.len() == 2));
    }
}
