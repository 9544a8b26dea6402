//! Error types for catview.
//!
//! One `thiserror` enum per layer, composed with `?` and `From`:
//!
//! - [`InputError`] - reading the catalog from a file or stdin
//!   - [`ParseError`] - turning the catalog document into items
//!
//! The search pipeline itself has no error states. Load failures stay in
//! the item source and are reported by the shell; they never reach the
//! controller.

use crate::model::ItemId;
use std::path::PathBuf;
use thiserror::Error;

/// Errors encountered while reading catalog input.
///
/// # Recovery Patterns
///
/// - **FileNotFound**: report the path and exit
/// - **NoInput**: print usage - the user must give a file or pipe stdin
/// - **Parse**: shown in the status line; the browser stays usable with an
///   empty catalog
/// - **Io**: report and exit
#[derive(Debug, Error)]
pub enum InputError {
    /// The catalog file does not exist.
    #[error("Catalog file not found: {path}")]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
    },

    /// No file given and stdin is an interactive terminal.
    #[error("No input: pass a catalog file or pipe JSON into stdin")]
    NoInput,

    /// The background loader went away before delivering.
    #[error("Catalog loader stopped before delivering items")]
    LoaderDisconnected,

    /// The catalog document could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Generic I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors turning a catalog document into items.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Document is not valid JSON or does not have the catalog shape.
    #[error("Invalid catalog JSON at line {line}, column {column}: {message}")]
    InvalidJson {
        /// 1-based line of the failure.
        line: usize,
        /// 1-based column of the failure.
        column: usize,
        /// Parser message.
        message: String,
    },

    /// Document parsed but holds no item array.
    #[error("Catalog must be an array of items or an object with an `items` array")]
    UnexpectedShape,

    /// An element of the item array is not a valid item.
    #[error("Invalid item at index {index}: {message}")]
    InvalidItem {
        /// Position in the item array.
        index: usize,
        /// Deserializer message.
        message: String,
    },

    /// Two items share an id.
    #[error("Duplicate item id `{id}` at index {index}")]
    DuplicateId {
        /// The repeated id.
        id: ItemId,
        /// Position of the second occurrence.
        index: usize,
    },
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        ParseError::InvalidJson {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}
