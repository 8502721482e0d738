//! Validation of pasted or uploaded import payloads.
//!
//! The whole batch is accepted or rejected; nothing is written to the store
//! from here.

use serde::Deserialize;
use serde_json::Value;

use crate::data::Feature;
use crate::error::{CatalogError, SchemaError};
use crate::store::FeatureStore;

const ENTRIES_KEY: &str = "new_features";
const REQUIRED_FIELDS: [&str; 3] = ["id", "title", "description"];

/// Turns raw import text into a validated batch of features.
pub fn parse_import(text: &str) -> Result<Vec<Feature>, CatalogError> {
    if text.trim().is_empty() {
        return Err(CatalogError::EmptyInput);
    }

    let parsed: Value =
        serde_json::from_str(text).map_err(|e| CatalogError::Parse(e.to_string()))?;

    let entries = parsed
        .get(ENTRIES_KEY)
        .and_then(Value::as_array)
        .ok_or(SchemaError::MissingEntries)?;

    for (index, entry) in entries.iter().enumerate() {
        check_required(index, entry)?;
    }

    let features = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            Feature::deserialize(entry).map_err(|e| SchemaError::MalformedEntry {
                index,
                reason: e.to_string(),
            })
        })
        .collect::<Result<Vec<Feature>, SchemaError>>()?;

    Ok(features)
}

/// Validates `text` and merges the batch into `store`. A rejected batch
/// leaves the store untouched.
pub fn import_into(store: &mut FeatureStore, text: &str) -> Result<usize, CatalogError> {
    let features = parse_import(text)?;
    let count = features.len();
    store.import_merge(features);
    Ok(count)
}

fn check_required(index: usize, entry: &Value) -> Result<(), SchemaError> {
    let Some(object) = entry.as_object() else {
        return Err(SchemaError::MalformedEntry {
            index,
            reason: "expected an object".to_string(),
        });
    };

    for field in REQUIRED_FIELDS {
        let present = object
            .get(field)
            .and_then(Value::as_str)
            .is_some_and(|s| !s.is_empty());
        if !present {
            return Err(SchemaError::MissingField { index, field });
        }
    }

    Ok(())
}
