//! Stdin-based catalog source for piped input.

use crate::model::error::InputError;
use crate::source::loader::{CatalogLoader, LoadResult};
use std::io::{IsTerminal, Read};

/// Catalog piped into stdin (`curl ... | catview`).
///
/// Reading stops at EOF; the document is parsed as a whole.
#[derive(Debug)]
pub struct StdinSource {
    loader: CatalogLoader,
}

impl StdinSource {
    /// Start loading from stdin.
    ///
    /// # Errors
    ///
    /// Returns `InputError::NoInput` if stdin is a TTY, so the TUI never
    /// sits waiting for a document the user forgot to pipe in.
    pub fn new() -> Result<Self, InputError> {
        if Self::is_tty() {
            return Err(InputError::NoInput);
        }
        Ok(Self::from_reader(std::io::stdin()))
    }

    /// Load from any reader instead of stdin.
    pub fn from_reader<R>(reader: R) -> Self
    where
        R: Read + Send + 'static,
    {
        Self {
            loader: CatalogLoader::spawn(reader),
        }
    }

    fn is_tty() -> bool {
        std::io::stdin().is_terminal()
    }

    /// Take the load result if it has arrived.
    pub fn poll(&mut self) -> Option<LoadResult> {
        self.loader.poll()
    }

    /// Whether EOF has not been reached yet.
    pub fn is_loading(&self) -> bool {
        self.loader.is_loading()
    }
}
