//! Background catalog loader.
//!
//! Reads a whole catalog document on a worker thread, parses it, and hands
//! the result back over a channel. The event loop polls without blocking.

use crate::model::{InputError, Item};
use crate::parser;
use std::io::Read;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, TryRecvError};
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

/// Result delivered by a loader.
pub type LoadResult = Result<Vec<Item>, InputError>;

/// One-shot catalog load running on its own thread.
#[derive(Debug)]
pub struct CatalogLoader {
    rx: Receiver<LoadResult>,
    done: bool,
}

impl CatalogLoader {
    /// Start loading from `reader` on a worker thread.
    pub fn spawn<R>(reader: R) -> Self
    where
        R: Read + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let result = read_catalog(reader);
            match &result {
                Ok(items) => debug!(count = items.len(), "catalog loaded"),
                Err(err) => warn!(error = %err, "catalog load failed"),
            }
            // Receiver gone means the app already quit.
            let _ = tx.send(result);
        });

        Self { rx, done: false }
    }

    /// Take the result if it has arrived.
    ///
    /// Yields `Some` exactly once; `None` before delivery and afterwards.
    pub fn poll(&mut self) -> Option<LoadResult> {
        if self.done {
            return None;
        }
        match self.rx.try_recv() {
            Ok(result) => {
                self.done = true;
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.done = true;
                Some(Err(InputError::LoaderDisconnected))
            }
        }
    }

    /// Block up to `timeout` for the result.
    pub fn wait(&mut self, timeout: Duration) -> Option<LoadResult> {
        if self.done {
            return None;
        }
        match self.rx.recv_timeout(timeout) {
            Ok(result) => {
                self.done = true;
                Some(result)
            }
            Err(RecvTimeoutError::Timeout) => None,
            Err(RecvTimeoutError::Disconnected) => {
                self.done = true;
                Some(Err(InputError::LoaderDisconnected))
            }
        }
    }

    /// Whether the result is still outstanding.
    pub fn is_loading(&self) -> bool {
        !self.done
    }
}

fn read_catalog<R: Read>(mut reader: R) -> LoadResult {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(parser::parse_catalog(&text)?)
}
