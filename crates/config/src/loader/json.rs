//! JSON document loading.
//!
//! Responsibilities:
//! - Deserialize JSON bytes into a generic value and coerce the top level to a `Mapping`.
//!
//! Invariants:
//! - A document that decodes to `null` is an error, never an empty mapping.
//! - Arrays at the top level are keyed by stringified index; other scalars land under `"0"`.

use serde::de::Error as _;

use crate::value::{ConfigValue, Mapping};

/// Parse JSON bytes into a mapping.
pub fn parse(content: &[u8]) -> Result<Mapping, serde_json::Error> {
    let document: serde_json::Value = serde_json::from_slice(content)?;
    match ConfigValue::from(document) {
        ConfigValue::Null => Err(serde_json::Error::custom("document is null")),
        ConfigValue::Mapping(map) => Ok(map),
        ConfigValue::Sequence(items) => Ok(items
            .into_iter()
            .enumerate()
            .map(|(i, item)| (i.to_string(), item))
            .collect()),
        scalar => Ok(Mapping::from([("0".to_string(), scalar)])),
    }
}
