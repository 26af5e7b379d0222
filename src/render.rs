//! HTML fragments making up a tooltip.
//!
//! The markup is consumed by the host UI, which styles the `tt-*` classes
//! and interprets the `pycmd` affordances. Only identifiers are embedded in
//! the affordances.

use crate::document::{CardId, NoteId};

/// Shown when snippet search ran and found nothing to display.
pub const EMPTY_RESULTS_MESSAGE: &str = "No other results found.";

/// Build the confirmation message for an oversized result set.
pub fn result_count_warning(count: usize) -> String {
    format!(
        "<b>{count}</b> relevant notes found.<br>\
         The tooltip could take a lot of time to render and <br>\
         temporarily slow down the application.<br><br>\
         <b>Are you sure you want to proceed?</b>"
    )
}

/// Wrap rendered blocks in the result list container.
pub fn result_list(blocks: &[String]) -> String {
    format!(r#"<div class="tt-reslist">{}</div>"#, blocks.concat())
}

/// Wrap one field's text in a field container.
pub fn field(text: &str) -> String {
    format!(r#"<div class="tt-fld">{text}</div>"#)
}

/// A snippet block for a note found by free-text search.
pub fn snippet(nid: NoteId, fields_html: &str) -> String {
    format!(
        "<div class=\"tt-res\" data-nid={nid}>{fields_html}<div title=\"Browse...\" class=\"tt-brws\"\n\
         onclick='pycmd(\"dctBrws:\" + this.parentNode.dataset.nid)'>&rarr;</div></div>"
    )
}

/// A dictionary block linked to its note only.
pub fn dictionary_entry(nid: NoteId, term: &str, definition: &str) -> String {
    let term = html_escape::encode_text(term);
    format!(
        "<div class=\"tt-res tt-dict\" data-nid={nid}>\n\
         \x20   <div class=\"tt-dict-title\">{term}:</div>\n\
         \x20   {definition}\n\
         \x20   <div title=\"Browse...\" class=\"tt-brws\" onclick='pycmd(\"dctBrws:\" + this.parentNode.dataset.nid)'>&rarr;</div>\n\
         </div>"
    )
}

/// A dictionary block with an additional card preview affordance.
pub fn dictionary_card_entry(cid: CardId, nid: NoteId, term: &str, definition: &str) -> String {
    let term = html_escape::encode_text(term);
    format!(
        "<div class=\"tt-res tt-dict\" data-cid={cid}>\n\
         \x20   <div class=\"tt-dict-title\">{term}:</div>\n\
         \x20   {definition}\n\
         \x20   <div title=\"Preview Card...\" class=\"tt-card\" onclick='pycmd(\"dctCard:\" + {cid})'>open card</div>\n\
         \x20   <div title=\"Browse...\" class=\"tt-brws\" onclick='pycmd(\"dctBrws:\" + {nid})'>&rarr;</div>\n\
         </div>"
    )
}
