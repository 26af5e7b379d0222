//! Command implementations for the popdict CLI.

use std::io::{self, BufRead, Write};

use anyhow::Context;
use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::cloze::{has_cloze, strip_cloze};
use crate::collection::{AutoAnswer, MemoryCollection, Prompt};
use crate::config::PopupConfig;
use crate::document::NoteId;
use crate::error::Result;
use crate::lookup::{LookupContext, TooltipComposer, snippet_query};
use crate::query::dictionary_query;

/// Execute a CLI command.
pub fn execute_command(args: PopdictArgs) -> Result<()> {
    match &args.command {
        Command::Lookup(lookup_args) => lookup(lookup_args, &args),
        Command::Query(query_args) => show_queries(query_args, &args),
        Command::Cloze(cloze_args) => strip(cloze_args, &args),
        Command::Config(config_args) => show_config(config_args, &args),
    }
}

/// Load the configuration named on the command line, or the defaults.
pub fn load_config(source: &ConfigSource) -> Result<PopupConfig> {
    match &source.config {
        Some(path) => {
            info!("loading configuration from {}", path.display());
            let config = PopupConfig::from_file(path)
                .with_context(|| format!("cannot load configuration {}", path.display()))?;
            Ok(config)
        }
        None => Ok(PopupConfig::default()),
    }
}

/// Asks on the terminal before rendering an oversized result set.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl TerminalPrompt {
    fn plain_text(message: &str) -> String {
        message
            .replace("<br>", "\n")
            .replace("<b>", "")
            .replace("</b>", "")
    }
}

impl Prompt for TerminalPrompt {
    fn confirm(&self, message: &str) -> bool {
        let mut stderr = io::stderr();
        if write!(stderr, "{} [y/N] ", Self::plain_text(message)).is_err() || stderr.flush().is_err()
        {
            return false;
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            Err(_) => false,
        }
    }
}

/// Compose a tooltip.
fn lookup(args: &LookupArgs, cli_args: &PopdictArgs) -> Result<()> {
    let config = load_config(&args.config)?;
    let collection = MemoryCollection::from_file(&args.collection)
        .with_context(|| format!("cannot load collection {}", args.collection.display()))?;
    info!(
        "loaded {} notes from {}",
        collection.len(),
        args.collection.display()
    );

    let reviewing = args.reviewing.map(NoteId);
    let auto_answer = AutoAnswer(args.yes);
    let terminal = TerminalPrompt;
    let prompt: &dyn Prompt = if args.yes || args.no {
        &auto_answer
    } else {
        &terminal
    };

    let tooltip = TooltipComposer::new(&collection, &config)
        .with_reviewer(&reviewing)
        .with_prompt(prompt)
        .compose_detailed(&args.term, args.ignore_nid.map(NoteId))?;

    output_result(&LookupResult::new(&args.term, tooltip), cli_args)
}

/// Show the queries a lookup would issue.
fn show_queries(args: &QueryArgs, cli_args: &PopdictArgs) -> Result<()> {
    let config = load_config(&args.config)?;
    output_result(&query_plan(args, &config), cli_args)
}

/// Build the queries with the same functions the lookup phases use.
///
/// Query construction never touches the collection, so an empty one stands
/// in for it.
pub fn query_plan(args: &QueryArgs, config: &PopupConfig) -> QueryPlan {
    let collection = MemoryCollection::new();
    let reviewing = args.reviewing.map(NoteId);
    let prompt = AutoAnswer(true);
    let ctx = LookupContext::new(&collection, config, &reviewing, &prompt);

    let snippet_query = config
        .snippets_enabled
        .then(|| snippet_query(&ctx, &args.term, args.ignore_nid.map(NoteId)));
    let dictionary_queries = if config.dictionary_enabled {
        config
            .dictionary_note_type_names
            .iter()
            .map(|note_type| {
                dictionary_query(note_type, &config.dictionary_term_field_name, &args.term)
            })
            .collect()
    } else {
        Vec::new()
    };

    QueryPlan {
        dictionary_queries,
        snippet_query,
    }
}

/// Strip cloze markers.
fn strip(args: &ClozeArgs, cli_args: &PopdictArgs) -> Result<()> {
    output_result(
        &ClozeResult {
            changed: has_cloze(&args.text),
            text: strip_cloze(&args.text).into_owned(),
        },
        cli_args,
    )
}

/// Show the effective configuration.
fn show_config(args: &ConfigArgs, cli_args: &PopdictArgs) -> Result<()> {
    let config = load_config(&args.config)?;
    output_result(&ConfigReport(config), cli_args)
}
