//! Catalog items and the snapshot handed over by the item source.

use crate::model::ItemId;
use serde::Deserialize;

/// Opaque fields carried through from the source document.
pub type ExtraFields = serde_json::Map<String, serde_json::Value>;

/// A single catalog entry.
///
/// Only `id` and `name` matter to the search pipeline; the rest is
/// passthrough payload shown by the detail popup.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Item {
    id: ItemId,
    name: String,
    #[serde(default, deserialize_with = "number_as_string")]
    number: Option<String>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    types: Vec<String>,
    #[serde(flatten)]
    extra: ExtraFields,
}

impl Item {
    /// Create an item with no payload fields.
    pub fn new(id: ItemId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            number: None,
            image: None,
            types: Vec::new(),
            extra: ExtraFields::new(),
        }
    }

    /// Set the catalog number.
    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = Some(number.into());
        self
    }

    /// Set the image reference.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Set the category tags.
    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = types.into_iter().map(Into::into).collect();
        self
    }

    /// Attach an opaque extra field.
    pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Stable identifier.
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    /// Display name (the search key).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Catalog number, if the source provided one.
    pub fn number(&self) -> Option<&str> {
        self.number.as_deref()
    }

    /// Image reference (URL or path), if any.
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Category tags.
    pub fn types(&self) -> &[String] {
        &self.types
    }

    /// Remaining source fields, in key order.
    pub fn extra(&self) -> &ExtraFields {
        &self.extra
    }
}

/// Accept catalog numbers written either as strings or as JSON numbers.
fn number_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected string or number for `number`, got {}",
            other
        ))),
    }
}

// ===== CatalogSnapshot =====

/// What the item source currently knows: the items and whether a load
/// is still in flight.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogSnapshot {
    /// Items in source order.
    pub items: Vec<Item>,
    /// `true` while the source has not delivered yet.
    pub loading: bool,
}

impl CatalogSnapshot {
    /// Snapshot for a source that has not delivered yet.
    pub fn loading() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
        }
    }

    /// Snapshot for a completed load.
    pub fn loaded(items: Vec<Item>) -> Self {
        Self {
            items,
            loading: false,
        }
    }

    /// Look up an item by id.
    pub fn find(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }
}
