//! Catalog document parser.
//!
//! Pure functions turning a JSON catalog into validated [`Item`]s.
//!
//! Accepted shapes:
//!
//! - a top-level array of items
//! - an object holding the array under `items` (or `pokemons`)
//! - either of the above inside a GraphQL-style `{"data": ...}` envelope

use crate::model::{Item, ParseError};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;

/// Keys that may hold the item array inside an object.
const ITEM_ARRAY_KEYS: [&str; 2] = ["items", "pokemons"];

/// Envelope key used by GraphQL responses.
const ENVELOPE_KEY: &str = "data";

/// Parse a catalog document.
///
/// # Errors
///
/// - [`ParseError::InvalidJson`] if the text is not JSON
/// - [`ParseError::UnexpectedShape`] if no item array can be found
/// - [`ParseError::InvalidItem`] if an element is not a valid item
/// - [`ParseError::DuplicateId`] if two items share an id
pub fn parse_catalog(text: &str) -> Result<Vec<Item>, ParseError> {
    let document: Value = serde_json::from_str(text)?;
    let elements = locate_items(document)?;

    let mut seen = HashSet::with_capacity(elements.len());
    let mut items = Vec::with_capacity(elements.len());

    for (index, element) in elements.into_iter().enumerate() {
        let item = Item::deserialize(element).map_err(|err| ParseError::InvalidItem {
            index,
            message: err.to_string(),
        })?;

        if !seen.insert(item.id().clone()) {
            return Err(ParseError::DuplicateId {
                id: item.id().clone(),
                index,
            });
        }
        items.push(item);
    }

    Ok(items)
}

/// Find the item array in a parsed document.
fn locate_items(document: Value) -> Result<Vec<Value>, ParseError> {
    match document {
        Value::Array(elements) => Ok(elements),
        Value::Object(mut map) => {
            for key in ITEM_ARRAY_KEYS {
                if let Some(Value::Array(elements)) = map.remove(key) {
                    return Ok(elements);
                }
            }
            match map.remove(ENVELOPE_KEY) {
                Some(inner @ (Value::Array(_) | Value::Object(_))) => locate_items(inner),
                _ => Err(ParseError::UnexpectedShape),
            }
        }
        _ => Err(ParseError::UnexpectedShape),
    }
}
