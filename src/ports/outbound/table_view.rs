use crate::application::dto::{HistoryEntry, TableSnapshot};

/// TableView port for the table container the dashboard renders into
///
/// The view is write-only from the dashboard's point of view: it receives
/// markup and never feeds state back. Every call replaces the previous
/// contents of that part of the page.
pub trait TableView {
    /// Replaces the header rows
    fn replace_head(&self, markup: &str);

    /// Replaces the body rows
    ///
    /// # Arguments
    /// * `markup` - Rendered rows
    /// * `visible` - Number of rows shown by default
    /// * `total` - Number of packages in the inventory
    fn replace_body(&self, markup: &str, visible: usize, total: usize);

    /// Updates the product version display
    fn show_version(&self, version: &str);

    /// Reflects the filter state into the address bar
    fn push_location(&self, entry: HistoryEntry);

    /// Current contents, for writing the final document
    fn snapshot(&self) -> TableSnapshot;
}
