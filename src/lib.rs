//! Catalog browser (catview)
//!
//! TUI for browsing a JSON item catalog: type to filter by name, and the
//! list follows once you pause typing, one page at a time.
//!
//! Follows a Pure Core / Impure Shell split: `model`, `parser` and `state`
//! hold no I/O and take time as an argument; `source`, `view`, `config`
//! and `logging` talk to the outside world.

pub mod config;
pub mod logging;
pub mod model;
pub mod parser;
pub mod source;
pub mod state;
pub mod view;
