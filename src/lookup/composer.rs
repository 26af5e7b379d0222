//! Tooltip composition.
//!
//! Runs dictionary lookup and snippet search for a term, sharing one
//! [`SeenNotes`] set between them, and turns the combined output into a
//! single HTML string.
//!
//! | snippet outcome | blocks collected | result |
//! |---|---|---|
//! | any | yes | `<div class="tt-reslist">...</div>` |
//! | declined | no | empty string |
//! | no matches, or only already-shown matches | no | fallback message if `generalConfirmEmpty`, else empty |
//! | snippet search disabled | no | empty string |

use log::debug;
use serde::{Deserialize, Serialize};

use crate::collection::{AutoAnswer, Collection, NoReview, Prompt, Reviewer};
use crate::config::PopupConfig;
use crate::document::NoteId;
use crate::error::Result;
use crate::lookup::LookupContext;
use crate::lookup::dictionary::search_dictionaries;
use crate::lookup::seen::SeenNotes;
use crate::lookup::snippets::{SnippetOutcome, SnippetStatus, search_snippets};
use crate::render;

/// Report of one composition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tooltip {
    /// The composed HTML, possibly empty.
    pub html: String,
    /// What snippet search did.
    pub snippets: SnippetStatus,
    /// Number of dictionary blocks rendered.
    pub dictionary_hits: usize,
    /// Number of snippet blocks rendered.
    pub snippet_hits: usize,
}

/// Composes tooltips from a collection.
///
/// Without [`with_reviewer`](Self::with_reviewer) no note is treated as
/// under review; without [`with_prompt`](Self::with_prompt) oversized
/// result sets are rendered without asking.
pub struct TooltipComposer<'a> {
    ctx: LookupContext<'a>,
}

impl<'a> TooltipComposer<'a> {
    /// Create a composer over a collection and configuration.
    pub fn new(collection: &'a dyn Collection, config: &'a PopupConfig) -> Self {
        TooltipComposer {
            ctx: LookupContext::new(collection, config, &NoReview, &AutoAnswer(true)),
        }
    }

    /// Use a host-provided reviewer.
    pub fn with_reviewer(mut self, reviewer: &'a dyn Reviewer) -> Self {
        self.ctx.reviewer = reviewer;
        self
    }

    /// Use a host-provided confirmation prompt.
    pub fn with_prompt(mut self, prompt: &'a dyn Prompt) -> Self {
        self.ctx.prompt = prompt;
        self
    }

    /// Compose the tooltip HTML for `term`, never showing `ignore_nid`.
    pub fn compose(&self, term: &str, ignore_nid: Option<NoteId>) -> Result<String> {
        Ok(self.compose_detailed(term, ignore_nid)?.html)
    }

    /// Compose the tooltip and report how it was put together.
    pub fn compose_detailed(&self, term: &str, ignore_nid: Option<NoteId>) -> Result<Tooltip> {
        let config = self.ctx.config;
        let mut seen = SeenNotes::new();
        let mut blocks = Vec::new();

        let mut dictionary_hits = 0;
        if config.dictionary_enabled {
            let entries = search_dictionaries(&self.ctx, term, &mut seen)?;
            dictionary_hits = entries.len();
            blocks.extend(entries);
        }

        let mut outcome = None;
        let mut snippet_hits = 0;
        if config.snippets_enabled {
            let result = search_snippets(&self.ctx, term, ignore_nid, &mut seen)?;
            if let SnippetOutcome::Found(snippets) = &result {
                snippet_hits = snippets.len();
                blocks.extend(snippets.iter().cloned());
            }
            outcome = Some(result);
        }
        debug!("composed {dictionary_hits} dictionary and {snippet_hits} snippet blocks for {term:?}");

        let html = if !blocks.is_empty() {
            render::result_list(&blocks)
        } else {
            match outcome {
                Some(SnippetOutcome::NoMatches) | Some(SnippetOutcome::Found(_))
                    if config.general_confirm_empty =>
                {
                    render::EMPTY_RESULTS_MESSAGE.to_string()
                }
                _ => String::new(),
            }
        };

        Ok(Tooltip {
            html,
            snippets: outcome
                .as_ref()
                .map_or(SnippetStatus::Disabled, SnippetOutcome::status),
            dictionary_hits,
            snippet_hits,
        })
    }
}
