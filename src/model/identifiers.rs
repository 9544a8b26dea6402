//! Item identifier newtype with a smart constructor.
//!
//! The raw constructor is never exported - use [`ItemId::new`].

use serde::{Deserialize, Deserializer};
use std::fmt;

/// Stable, unique identifier of a catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(String);

impl ItemId {
    /// Smart constructor: validates non-empty, non-blank id.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidItemId> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            Err(InvalidItemId::Empty)
        } else {
            Ok(Self(raw))
        }
    }

    /// Borrow the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        ItemId::new(raw).map_err(serde::de::Error::custom)
    }
}

// ===== Error Types =====

/// Rejected item identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidItemId {
    /// Id was empty or whitespace only.
    #[error("Item ID cannot be empty")]
    Empty,
}

// ===== Tests =====
