use crate::application::dto::TableSnapshot;
use crate::dashboard::domain::{ColumnSchema, PackageRecord, TableRow};
use crate::shared::Result;

/// TableFormatter port for turning rows into markup
///
/// The controller renders the header once per inventory load and the body
/// once per filter pass; the final document wraps whatever the view holds.
pub trait TableFormatter {
    /// Renders the table header for a schema
    fn format_head(&self, schema: &ColumnSchema) -> String;

    /// Renders one row
    ///
    /// # Arguments
    /// * `row` - Grouping and visibility information for the row
    /// * `record` - The package's status fields
    /// * `schema` - Column layout shared with the header
    fn format_row(&self, row: &TableRow, record: &PackageRecord, schema: &ColumnSchema)
        -> String;

    /// Wraps the current view contents into a complete document
    ///
    /// # Errors
    /// Returns an error if the document cannot be assembled
    fn format_document(&self, snapshot: &TableSnapshot) -> Result<String>;
}
