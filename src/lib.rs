//! # popdict
//!
//! Composes inline tooltips for a looked-up term from a note collection.
//!
//! ## Features
//!
//! - Dictionary entries from designated note types, linked to their first card
//! - Free-text snippets from the rest of the collection, cloze-stripped
//! - Cross-phase de-duplication so a note is shown at most once
//! - Confirmation gate for oversized result sets
//! - In-memory reference collection implementing the search grammar

pub mod cli;
pub mod cloze;
pub mod collection;
pub mod config;
pub mod document;
pub mod error;
pub mod lookup;
pub mod query;
pub mod render;

pub mod prelude {
    pub use crate::collection::{
        AutoAnswer, Collection, MemoryCollection, NoReview, Prompt, Reviewer,
    };
    pub use crate::config::PopupConfig;
    pub use crate::document::{Card, CardId, Note, NoteId};
    pub use crate::error::{PopdictError, Result};
    pub use crate::lookup::{SnippetStatus, Tooltip, TooltipComposer};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
