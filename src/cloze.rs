//! Cloze marker removal.
//!
//! Field text may embed cloze deletions of the form `{{c1::answer}}` or
//! `{{c1::answer::hint}}`. Snippets show only the answer.

use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref CLOZE_RE: Regex =
        Regex::new(r"\{\{c(\d+)::(.*?)(::(.*?))?\}\}").expect("cloze pattern is valid");
}

/// Replace every cloze marker with its answer, dropping index and hint.
///
/// Text without markers is returned borrowed and unchanged.
///
/// ```
/// use popdict::cloze::strip_cloze;
///
/// assert_eq!(strip_cloze("{{c1::Paris::capital}} is big"), "Paris is big");
/// ```
pub fn strip_cloze(text: &str) -> Cow<'_, str> {
    CLOZE_RE.replace_all(text, "${2}")
}

/// Whether the text contains at least one cloze marker.
pub fn has_cloze(text: &str) -> bool {
    CLOZE_RE.is_match(text)
}
