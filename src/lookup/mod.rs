//! Tooltip lookup: dictionary entries, note snippets and their composition.

pub mod composer;
pub mod dictionary;
pub mod seen;
pub mod snippets;

pub use composer::{Tooltip, TooltipComposer};
pub use dictionary::search_dictionaries;
pub use seen::SeenNotes;
pub use snippets::{SnippetOutcome, SnippetStatus, search_snippets, snippet_query};

use crate::collection::{Collection, Prompt, Reviewer};
use crate::config::PopupConfig;

/// Collaborators shared by the lookup phases of one composition.
#[derive(Clone, Copy)]
pub struct LookupContext<'a> {
    /// Collection searched by both phases.
    pub collection: &'a dyn Collection,
    /// Read-only configuration snapshot.
    pub config: &'a PopupConfig,
    /// Source of the note under review.
    pub reviewer: &'a dyn Reviewer,
    /// Confirmation for oversized result sets.
    pub prompt: &'a dyn Prompt,
}

impl<'a> LookupContext<'a> {
    /// Bundle the collaborators.
    pub fn new(
        collection: &'a dyn Collection,
        config: &'a PopupConfig,
        reviewer: &'a dyn Reviewer,
        prompt: &'a dyn Prompt,
    ) -> Self {
        LookupContext {
            collection,
            config,
            reviewer,
            prompt,
        }
    }
}
