//! Error types for the popdict library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`PopdictError`] enum.
//!
//! # Examples
//!
//! ```
//! use popdict::error::{PopdictError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(PopdictError::query("unterminated quote"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

use crate::document::NoteId;

/// The main error type for popdict operations.
///
/// A dictionary note that lacks its definition field is not represented
/// here: that case is skipped during lookup and never surfaces as an error.
#[derive(Error, Debug)]
pub enum PopdictError {
    /// I/O errors (reading configuration or collection files, prompting)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed query strings
    #[error("Query error: {0}")]
    Query(String),

    /// A note id that the collection does not know about
    #[error("Note not found: {0}")]
    NoteNotFound(NoteId),

    /// Invalid or inconsistent configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failures raised by the backing collection store
    #[error("Store error: {0}")]
    Store(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Errors carrying context attached by the command-line layer
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with PopdictError.
pub type Result<T> = std::result::Result<T, PopdictError>;

impl PopdictError {
    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        PopdictError::Query(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        PopdictError::Config(msg.into())
    }

    /// Create a new store error.
    pub fn store<S: Into<String>>(msg: S) -> Self {
        PopdictError::Store(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        PopdictError::Other(format!("Invalid argument: {}", msg.into()))
    }
}
