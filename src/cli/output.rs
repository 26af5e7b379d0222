//! Output formatting for CLI commands.

use std::fmt::Write as _;

use serde::Serialize;

use crate::cli::args::{OutputFormat, PopdictArgs};
use crate::config::PopupConfig;
use crate::error::Result;
use crate::lookup::{SnippetStatus, Tooltip};

/// Something a command prints.
pub trait Report: Serialize {
    /// Human-readable rendering.
    fn human(&self, verbosity: u8) -> String;
}

/// Result of the `lookup` command.
#[derive(Debug, Serialize)]
pub struct LookupResult {
    pub term: String,
    #[serde(flatten)]
    pub tooltip: Tooltip,
}

impl LookupResult {
    pub fn new(term: &str, tooltip: Tooltip) -> Self {
        LookupResult {
            term: term.to_string(),
            tooltip,
        }
    }
}

impl Report for LookupResult {
    fn human(&self, verbosity: u8) -> String {
        let mut out = String::new();
        if verbosity > 1 {
            let status = match self.tooltip.snippets {
                SnippetStatus::Disabled => "disabled",
                SnippetStatus::NoMatches => "no matches",
                SnippetStatus::Declined => "declined",
                SnippetStatus::Found => "found",
            };
            let _ = writeln!(out, "Term: {}", self.term);
            let _ = writeln!(out, "Dictionary entries: {}", self.tooltip.dictionary_hits);
            let _ = writeln!(
                out,
                "Snippets: {} ({status})",
                self.tooltip.snippet_hits
            );
            out.push('\n');
        }
        out.push_str(&self.tooltip.html);
        out
    }
}

/// Result of the `query` command.
#[derive(Debug, Serialize)]
pub struct QueryPlan {
    pub dictionary_queries: Vec<String>,
    pub snippet_query: Option<String>,
}

impl Report for QueryPlan {
    fn human(&self, _verbosity: u8) -> String {
        let mut out = String::new();
        for query in &self.dictionary_queries {
            let _ = writeln!(out, "dictionary: {query}");
        }
        if let Some(query) = &self.snippet_query {
            let _ = writeln!(out, "snippets:   {query}");
        }
        out.trim_end().to_string()
    }
}

/// Result of the `cloze` command.
#[derive(Debug, Serialize)]
pub struct ClozeResult {
    pub text: String,
    pub changed: bool,
}

impl Report for ClozeResult {
    fn human(&self, _verbosity: u8) -> String {
        self.text.clone()
    }
}

/// Result of the `config` command.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct ConfigReport(pub PopupConfig);

impl Report for ConfigReport {
    fn human(&self, _verbosity: u8) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_default()
    }
}

/// Render a result in the requested format.
pub fn format_result<T: Report>(result: &T, args: &PopdictArgs) -> Result<String> {
    Ok(match args.output_format {
        OutputFormat::Human => result.human(args.verbosity()),
        OutputFormat::Json if args.pretty => serde_json::to_string_pretty(result)?,
        OutputFormat::Json => serde_json::to_string(result)?,
    })
}

/// Print a result in the requested format.
pub fn output_result<T: Report>(result: &T, args: &PopdictArgs) -> Result<()> {
    let rendered = format_result(result, args)?;
    if !rendered.is_empty() {
        println!("{rendered}");
    }
    Ok(())
}
