//! Catalog input sources.
//!
//! This module provides the data-fetch side of the browser:
//! - File loading for a catalog on disk
//! - Stdin for a piped catalog
//! - Unified InputSource enum for both
//!
//! Both variants load on a background thread. The browser treats an
//! outstanding load as `loading = true` and keeps its search state.

use crate::model::CatalogSnapshot;
use crate::model::error::InputError;
use std::path::PathBuf;

pub mod file;
pub mod loader;
pub mod stdin;

pub use file::FileSource;
pub use loader::{CatalogLoader, LoadResult};
pub use stdin::StdinSource;

/// Unified catalog source.
///
/// Sum type enforces exactly one variant.
#[derive(Debug)]
pub enum InputSource {
    /// Catalog file on disk.
    File(FileSource),
    /// Catalog piped into stdin.
    Stdin(StdinSource),
}

impl InputSource {
    /// Take the load result if it has arrived.
    ///
    /// Non-blocking. Yields `Some` exactly once.
    pub fn poll(&mut self) -> Option<LoadResult> {
        match self {
            InputSource::File(f) => f.poll(),
            InputSource::Stdin(s) => s.poll(),
        }
    }

    /// Whether the load is still in flight.
    pub fn is_loading(&self) -> bool {
        match self {
            InputSource::File(f) => f.is_loading(),
            InputSource::Stdin(s) => s.is_loading(),
        }
    }

    /// Human-readable origin for the status line.
    pub fn describe(&self) -> String {
        match self {
            InputSource::File(f) => f.path().display().to_string(),
            InputSource::Stdin(_) => "stdin".to_string(),
        }
    }
}

/// Detect and create appropriate input source.
///
/// # Logic:
/// 1. If file path is provided: create FileSource
/// 2. Else: read stdin (must be piped)
///
/// # Errors
///
/// Returns `InputError::FileNotFound` if the file does not exist.
/// Returns `InputError::NoInput` if no file is given and stdin is a TTY.
pub fn detect_input_source(file: Option<PathBuf>) -> Result<InputSource, InputError> {
    match file {
        Some(path) => Ok(InputSource::File(FileSource::new(path)?)),
        None => Ok(InputSource::Stdin(StdinSource::new()?)),
    }
}

/// Fold a poll outcome into the snapshot.
///
/// A delivered catalog replaces the items and clears `loading`. A failed
/// load also clears `loading` (leaving the items empty) and hands the
/// error back for the caller to report.
pub fn apply_load_result(
    snapshot: &mut CatalogSnapshot,
    result: LoadResult,
) -> Result<(), InputError> {
    snapshot.loading = false;
    match result {
        Ok(items) => {
            snapshot.items = items;
            Ok(())
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use std::time::Duration;

    fn wait_for(source: &mut InputSource) -> LoadResult {
        for _ in 0..500 {
            if let Some(result) = source.poll() {
                return result;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        panic!("source never delivered");
    }

    #[test]
    fn detect_uses_file_when_path_given() {
        let path = std::env::temp_dir().join("catview_detect_source.json");
        fs::write(&path, "[]").unwrap();

        let source = detect_input_source(Some(path.clone())).unwrap();
        let _ = fs::remove_file(&path);

        assert!(matches!(source, InputSource::File(_)));
        assert_eq!(source.describe(), path.display().to_string());
    }

    #[test]
    fn detect_reports_missing_file() {
        let result = detect_input_source(Some(PathBuf::from("/nonexistent/catview.json")));
        assert!(matches!(result, Err(InputError::FileNotFound { .. })));
    }

    #[test]
    fn stdin_variant_polls_through() {
        let mut source = InputSource::Stdin(StdinSource::from_reader(Cursor::new(
            br#"[{"id":"1","name":"Ditto"}]"#.to_vec(),
        )));
        assert_eq!(source.describe(), "stdin");

        let items = wait_for(&mut source).unwrap();

        assert_eq!(items[0].name(), "Ditto");
        assert!(!source.is_loading());
        assert!(source.poll().is_none());
    }

    #[test]
    fn apply_load_result_fills_snapshot() {
        let mut snapshot = CatalogSnapshot::loading();
        let item = crate::model::Item::new(crate::model::ItemId::new("1").unwrap(), "Onix");

        apply_load_result(&mut snapshot, Ok(vec![item])).unwrap();

        assert!(!snapshot.loading);
        assert_eq!(snapshot.items.len(), 1);
    }

    #[test]
    fn apply_load_result_clears_loading_on_error() {
        let mut snapshot = CatalogSnapshot::loading();

        let result = apply_load_result(&mut snapshot, Err(InputError::NoInput));

        assert!(result.is_err());
        assert!(!snapshot.loading);
        assert!(snapshot.items.is_empty());
    }
}
