//! Domain model: items, identifiers, errors, key actions.

pub mod error;
pub mod identifiers;
pub mod item;
pub mod key_action;

pub use error::{InputError, ParseError};
pub use identifiers::{InvalidItemId, ItemId};
pub use item::{CatalogSnapshot, ExtraFields, Item};
pub use key_action::KeyAction;
