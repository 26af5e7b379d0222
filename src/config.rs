//! Configuration for tooltip composition.
//!
//! [`PopupConfig`] is a read-only snapshot handed to the composer by
//! reference. Its JSON keys are the option names used by the host add-on
//! configuration (`dictionaryEnabled`, `snippetsResultsWarnLimit`, ...), and
//! every key is optional.
//!
//! # Examples
//!
//! ```
//! use popdict::config::PopupConfig;
//!
//! let config = PopupConfig::from_json_str(r#"{"snippetsResultsWarnLimit": 50}"#).unwrap();
//! assert_eq!(config.snippets_results_warn_limit, 50);
//! assert!(config.snippets_enabled);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{PopdictError, Result};

/// Options consumed by dictionary lookup, snippet search and the composer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PopupConfig {
    /// Run dictionary lookup.
    pub dictionary_enabled: bool,
    /// Run snippet search.
    pub snippets_enabled: bool,
    /// Restrict snippet search to the current deck.
    pub snippets_limit_to_current_deck: bool,
    /// Ask for confirmation above this many snippet matches. `<= 0` disables the gate.
    pub snippets_results_warn_limit: i64,
    /// Field names left out of rendered snippets.
    pub snippets_excluded_fields: Vec<String>,
    /// Show the fallback message when snippet search finds nothing.
    pub general_confirm_empty: bool,
    /// Dictionary note types, checked in order.
    pub dictionary_note_type_names: Vec<String>,
    /// Field holding the looked-up term in a dictionary note.
    pub dictionary_term_field_name: String,
    /// Field holding the definition in a dictionary note.
    pub dictionary_definition_field_name: String,
}

impl Default for PopupConfig {
    fn default() -> Self {
        PopupConfig {
            dictionary_enabled: true,
            snippets_enabled: true,
            snippets_limit_to_current_deck: false,
            snippets_results_warn_limit: 1000,
            snippets_excluded_fields: Vec::new(),
            general_confirm_empty: true,
            dictionary_note_type_names: vec!["Dictionary".to_string()],
            dictionary_term_field_name: "Term".to_string(),
            dictionary_definition_field_name: "Definition".to_string(),
        }
    }
}

impl PopupConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON.
    ///
    /// Accepts either the bare option object or the host layout that nests
    /// it under a `"local"` key.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value = match serde_json::from_str::<Value>(json)? {
            Value::Object(mut map) if map.contains_key("local") => {
                map.remove("local").unwrap_or_default()
            }
            other => other,
        };
        if !value.is_object() {
            return Err(PopdictError::config("configuration must be a JSON object"));
        }

        let config: PopupConfig = serde_json::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Check that enabled phases have what they need.
    pub fn validate(&self) -> Result<()> {
        if self.dictionary_enabled {
            if self.dictionary_term_field_name.trim().is_empty() {
                return Err(PopdictError::config(
                    "dictionaryTermFieldName must not be empty when the dictionary is enabled",
                ));
            }
            if self.dictionary_definition_field_name.trim().is_empty() {
                return Err(PopdictError::config(
                    "dictionaryDefinitionFieldName must not be empty when the dictionary is enabled",
                ));
            }
        }
        Ok(())
    }

    /// Whether the oversized-result gate applies to `count` matches.
    pub fn exceeds_warn_limit(&self, count: usize) -> bool {
        self.snippets_results_warn_limit > 0
            && count as u64 > self.snippets_results_warn_limit as u64
    }

    /// Whether a field is left out of rendered snippets.
    pub fn is_field_excluded(&self, name: &str) -> bool {
        self.snippets_excluded_fields.iter().any(|f| f == name)
    }

    /// Toggle dictionary lookup.
    pub fn with_dictionary(mut self, enabled: bool) -> Self {
        self.dictionary_enabled = enabled;
        self
    }

    /// Toggle snippet search.
    pub fn with_snippets(mut self, enabled: bool) -> Self {
        self.snippets_enabled = enabled;
        self
    }

    /// Toggle the current-deck restriction.
    pub fn with_limit_to_current_deck(mut self, enabled: bool) -> Self {
        self.snippets_limit_to_current_deck = enabled;
        self
    }

    /// Set the confirmation threshold.
    pub fn with_warn_limit(mut self, limit: i64) -> Self {
        self.snippets_results_warn_limit = limit;
        self
    }

    /// Set the fields excluded from snippets.
    pub fn with_excluded_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.snippets_excluded_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Toggle the empty-result fallback message.
    pub fn with_confirm_empty(mut self, enabled: bool) -> Self {
        self.general_confirm_empty = enabled;
        self
    }

    /// Set the dictionary note types.
    pub fn with_dictionary_note_types<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dictionary_note_type_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the dictionary term and definition field names.
    pub fn with_dictionary_fields<S: Into<String>, T: Into<String>>(
        mut self,
        term_field: S,
        definition_field: T,
    ) -> Self {
        self.dictionary_term_field_name = term_field.into();
        self.dictionary_definition_field_name = definition_field.into();
        self
    }
}
