//! Field decoders for upstream records.
//!
//! A malformed optional field degrades to its "absent" value instead of
//! failing the record, so one bad row never sinks a whole snapshot.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::category::{Category, CategorySlug};

/// Any value that does not decode as `T` becomes `None`.
pub(crate) fn optional<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(raw).ok())
}

/// Like [`optional`], but falls back to `T::default()`.
pub(crate) fn optional_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(optional(deserializer)?.unwrap_or_default())
}

/// Known category strings map to their variant; anything else is `Other`.
pub(crate) fn category<'de, D>(deserializer: D) -> Result<Category, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(raw.as_str().map_or(Category::Other, Category::parse))
}

/// Only exact known slug strings survive.
pub(crate) fn category_slug<'de, D>(deserializer: D) -> Result<Option<CategorySlug>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(raw.as_str().and_then(CategorySlug::parse))
}

/// Non-object payloads are dropped.
pub(crate) fn object<'de, D>(deserializer: D) -> Result<Option<Map<String, Value>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Object(bag) => Ok(Some(bag)),
        _ => Ok(None),
    }
}
