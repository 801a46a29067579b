use crate::dashboard::domain::{
    is_metadata_field, Column, ColumnSchema, Inventory, PackageRecord, MANDATORY_COLUMNS,
};
use serde_json::Value;

/// SchemaInferencer service for deriving the table layout from the payload
///
/// The payload carries no schema, so the layout is read off a single sampled
/// record and assumed to hold for every other record. [`Self::validate`]
/// reports records that break that assumption.
pub struct SchemaInferencer;

/// A record whose keys do not fit the sampled schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaDrift {
    pub id: String,
    /// Top-level keys with no column in the schema
    pub unexpected_keys: Vec<String>,
    /// `(column, platform)` pairs with no sub-column in the schema
    pub unexpected_platforms: Vec<(String, String)>,
}

impl SchemaInferencer {
    /// Builds the column layout from one record
    ///
    /// Mandatory columns come first. Every other non-metadata key follows in
    /// alphabetical order; numeric-prefixed keys become runtime-version
    /// columns whose sub-columns are the sorted keys of the nested map.
    pub fn infer(record: &PackageRecord) -> ColumnSchema {
        let mut columns: Vec<Column> = MANDATORY_COLUMNS
            .iter()
            .map(|key| Column::Flat {
                key: key.to_string(),
            })
            .collect();

        let mut inferred: Vec<Column> = record
            .iter()
            .filter(|(key, _)| !is_metadata_field(key))
            .filter(|(key, _)| !MANDATORY_COLUMNS.contains(&key.as_str()))
            .map(|(key, value)| {
                if is_runtime_version_key(key) {
                    Column::RuntimeVersion {
                        key: key.clone(),
                        platforms: sorted_platforms(value),
                    }
                } else {
                    Column::Flat { key: key.clone() }
                }
            })
            .collect();
        inferred.sort_by(|a, b| a.key().cmp(b.key()));

        columns.extend(inferred);
        ColumnSchema::new(columns)
    }

    /// Samples the first record in payload order. An empty inventory yields
    /// the mandatory columns only.
    pub fn infer_from(inventory: &Inventory) -> ColumnSchema {
        inventory
            .first()
            .map(|(_, record)| Self::infer(record))
            .unwrap_or_else(ColumnSchema::mandatory_only)
    }

    /// Lists records carrying keys or platforms the schema does not render
    pub fn validate(inventory: &Inventory, schema: &ColumnSchema) -> Vec<SchemaDrift> {
        inventory
            .iter()
            .filter_map(|(id, record)| {
                let mut unexpected_keys = Vec::new();
                let mut unexpected_platforms = Vec::new();

                for (key, value) in record {
                    if is_metadata_field(key) {
                        continue;
                    }
                    match schema.get(key) {
                        None => unexpected_keys.push(key.clone()),
                        Some(Column::RuntimeVersion { platforms, .. }) => {
                            if let Value::Object(nested) = value {
                                for platform in nested.keys() {
                                    if !platforms.contains(platform) {
                                        unexpected_platforms
                                            .push((key.clone(), platform.clone()));
                                    }
                                }
                            }
                        }
                        Some(Column::Flat { .. }) => {}
                    }
                }

                if unexpected_keys.is_empty() && unexpected_platforms.is_empty() {
                    None
                } else {
                    Some(SchemaDrift {
                        id: id.to_string(),
                        unexpected_keys,
                        unexpected_platforms,
                    })
                }
            })
            .collect()
    }
}

/// True when the key starts with an integer, as runtime release keys do
/// (`"5.30"`, `"7"`, `"10-threaded"`). Leading whitespace and a sign are
/// accepted before the digits.
pub fn is_runtime_version_key(key: &str) -> bool {
    let trimmed = key.trim_start();
    let unsigned = trimmed
        .strip_prefix('+')
        .or_else(|| trimmed.strip_prefix('-'))
        .unwrap_or(trimmed);
    unsigned.chars().next().is_some_and(|c| c.is_ascii_digit())
}

fn sorted_platforms(value: &Value) -> Vec<String> {
    let mut platforms: Vec<String> = match value {
        Value::Object(nested) => nested.keys().cloned().collect(),
        _ => Vec::new(),
    };
    platforms.sort();
    platforms
}
