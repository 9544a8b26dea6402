//! File-based catalog source.

use crate::model::error::InputError;
use crate::source::loader::{CatalogLoader, LoadResult};
use std::fs::File;
use std::path::{Path, PathBuf};

/// Catalog read from a JSON file.
///
/// The file is opened on construction (so a bad path fails early) and
/// read and parsed on a background thread.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    loader: CatalogLoader,
}

impl FileSource {
    /// Open `path` and start loading it.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if the file does not exist.
    /// Returns `InputError::Io` if it cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(InputError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let file = File::open(path)?;

        Ok(Self {
            path: path.to_path_buf(),
            loader: CatalogLoader::spawn(file),
        })
    }

    /// Path being loaded.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Take the load result if it has arrived.
    pub fn poll(&mut self) -> Option<LoadResult> {
        self.loader.poll()
    }

    /// Whether the file is still being read.
    pub fn is_loading(&self) -> bool {
        self.loader.is_loading()
    }
}
