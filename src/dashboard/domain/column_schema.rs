use super::record::{is_truthy, PackageRecord};
use serde_json::Value;

/// Columns that always lead the table, in this order
pub const MANDATORY_COLUMNS: [&str; 2] = ["spec", "source"];

/// One displayable column
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Column {
    /// A single status flag
    Flat { key: String },
    /// A numbered runtime release with one sub-column per platform
    RuntimeVersion { key: String, platforms: Vec<String> },
}

impl Column {
    pub fn key(&self) -> &str {
        match self {
            Column::Flat { key } | Column::RuntimeVersion { key, .. } => key,
        }
    }

    /// Number of status cells this column contributes to each row
    pub fn width(&self) -> usize {
        match self {
            Column::Flat { .. } => 1,
            Column::RuntimeVersion { platforms, .. } => platforms.len(),
        }
    }
}

/// Ordered column layout shared by the header and every row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSchema {
    columns: Vec<Column>,
}

impl ColumnSchema {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Schema with only the mandatory columns, used when there is nothing to
    /// sample.
    pub fn mandatory_only() -> Self {
        Self::new(
            MANDATORY_COLUMNS
                .iter()
                .map(|key| Column::Flat {
                    key: key.to_string(),
                })
                .collect(),
        )
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn get(&self, key: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.key() == key)
    }

    /// Total status cells per row
    pub fn cell_count(&self) -> usize {
        self.columns.iter().map(Column::width).sum()
    }

    pub fn has_runtime_versions(&self) -> bool {
        self.columns
            .iter()
            .any(|c| matches!(c, Column::RuntimeVersion { .. }))
    }

    /// Present/missing flag for every status cell of `record`, in column
    /// order. A runtime-version cell is present only when the column holds a
    /// map with a truthy value for that platform.
    pub fn status_cells(&self, record: &PackageRecord) -> Vec<bool> {
        let mut cells = Vec::with_capacity(self.cell_count());
        for column in &self.columns {
            match column {
                Column::Flat { key } => {
                    cells.push(record.get(key).is_some_and(is_truthy));
                }
                Column::RuntimeVersion { key, platforms } => {
                    let nested = record.get(key).and_then(Value::as_object);
                    cells.extend(platforms.iter().map(|platform| {
                        nested
                            .and_then(|map| map.get(platform))
                            .is_some_and(is_truthy)
                    }));
                }
            }
        }
        cells
    }
}

impl Default for ColumnSchema {
    fn default() -> Self {
        Self::mandatory_only()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mandatory_only() {
        let schema = ColumnSchema::mandatory_only();
        let keys: Vec<&str> = schema.columns().iter().map(Column::key).collect();
        assert_eq!(keys, vec!["spec", "source"]);
        assert!(!schema.has_runtime_versions());
    }

    #[test]
    fn test_cell_count_includes_platforms() {
        let schema = ColumnSchema::new(vec![
            Column::Flat {
                key: "spec".to_string(),
            },
            Column::RuntimeVersion {
                key: "5.30".to_string(),
                platforms: vec!["darwin".to_string(), "linux".to_string()],
            },
        ]);
        assert_eq!(schema.cell_count(), 3);
        assert_eq!(schema.get("5.30").unwrap().width(), 2);
        assert!(schema.get("missing").is_none());
    }

    #[test]
    fn test_status_cells() {
        let schema = ColumnSchema::new(vec![
            Column::Flat {
                key: "spec".to_string(),
            },
            Column::Flat {
                key: "source".to_string(),
            },
            Column::RuntimeVersion {
                key: "5.30".to_string(),
                platforms: vec!["darwin".to_string(), "linux".to_string()],
            },
        ]);
        let record = serde_json::json!({
            "spec": 1,
            "source": "0",
            "5.30": {"linux": 1, "darwin": 0}
        });

        let cells = schema.status_cells(record.as_object().unwrap());
        assert_eq!(cells, vec![true, true, false, true]);
    }

    #[test]
    fn test_status_cells_for_missing_fields() {
        let schema = ColumnSchema::new(vec![Column::RuntimeVersion {
            key: "5.30".to_string(),
            platforms: vec!["linux".to_string()],
        }]);
        let record = serde_json::json!({"5.30": 1});

        assert_eq!(schema.status_cells(record.as_object().unwrap()), vec![false]);
        assert_eq!(schema.status_cells(&PackageRecord::new()), vec![false]);
    }
}
