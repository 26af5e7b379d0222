//! Dictionary lookup.
//!
//! Each configured dictionary note type is searched for a note whose term
//! field equals the looked-up term. The first hit per type is rendered as a
//! definition block, linked to its ordinal-0 card when the note has one.

use log::{debug, warn};

use crate::error::Result;
use crate::lookup::LookupContext;
use crate::lookup::seen::SeenNotes;
use crate::query::dictionary_query;
use crate::render;

/// Render one definition block per dictionary note type with an entry for
/// `term`, in configuration order.
///
/// Notes are recorded in `seen`. A dictionary note without the configured
/// definition field is skipped silently, as is a note already in `seen`.
pub fn search_dictionaries(
    ctx: &LookupContext<'_>,
    term: &str,
    seen: &mut SeenNotes,
) -> Result<Vec<String>> {
    let config = ctx.config;
    let mut blocks = Vec::new();

    for note_type in &config.dictionary_note_type_names {
        let query = dictionary_query(note_type, &config.dictionary_term_field_name, term);
        debug!("dictionary query: {query}");

        // Lowest id wins so repeated lookups pick the same entry regardless
        // of the store's native ordering.
        let Some(nid) = ctx.collection.find_notes(&query)?.into_iter().min() else {
            continue;
        };
        if seen.contains(nid) {
            debug!("dictionary note {nid} already rendered, skipping");
            continue;
        }

        let note = ctx.collection.get_note(nid)?;
        let card = note.card_at(0).map(|card| card.id);
        let Some(definition) = note.get_field(&config.dictionary_definition_field_name) else {
            warn!(
                "dictionary note {nid} of type {note_type:?} has no field {:?}",
                config.dictionary_definition_field_name
            );
            continue;
        };

        seen.insert(nid);
        blocks.push(match card {
            Some(cid) => render::dictionary_card_entry(cid, nid, term, definition),
            None => render::dictionary_entry(nid, term, definition),
        });
    }

    Ok(blocks)
}
