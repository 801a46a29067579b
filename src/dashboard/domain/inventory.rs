use super::record::PackageRecord;
use crate::shared::error::DashboardError;
use crate::shared::Result;
use serde_json::{Map, Value};

/// Full package inventory keyed by `"<name>=<version>"`.
///
/// Iteration follows payload order, which matters because the column schema
/// is sampled from the first record. An inventory is never mutated after
/// construction; a new payload produces a new inventory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    records: Map<String, Value>,
}

impl Inventory {
    /// Builds an inventory from a decoded payload.
    ///
    /// # Errors
    /// Returns an error if the payload is not a JSON object. Individual
    /// records that are not objects are kept as empty records.
    pub fn from_value(payload: Value) -> Result<Self> {
        let entries = match payload {
            Value::Object(entries) => entries,
            other => {
                return Err(DashboardError::PayloadParseError {
                    details: format!("expected a JSON object, got {}", json_kind(&other)),
                }
                .into())
            }
        };

        let records = entries
            .into_iter()
            .map(|(id, record)| match record {
                Value::Object(_) => (id, record),
                _ => (id, Value::Object(Map::new())),
            })
            .collect();

        Ok(Self { records })
    }

    /// Parses a raw JSON snapshot (as stored in the cache).
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let payload: Value =
            serde_json::from_str(raw).map_err(|e| DashboardError::PayloadParseError {
                details: e.to_string(),
            })?;
        Self::from_value(payload)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&PackageRecord> {
        self.records.get(id).and_then(Value::as_object)
    }

    /// First record in payload order, the schema sample.
    pub fn first(&self) -> Option<(&str, &PackageRecord)> {
        self.iter().next()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PackageRecord)> {
        self.records
            .iter()
            .filter_map(|(id, record)| record.as_object().map(|r| (id.as_str(), r)))
    }

    /// All identifiers, sorted lexicographically.
    pub fn sorted_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.records.keys().cloned().collect();
        ids.sort();
        ids
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
