/// Mock implementations for testing
mod mock_cache_store;
mod mock_inventory_source;
mod mock_progress_reporter;
mod mock_table_view;

pub use mock_cache_store::MockCacheStore;
pub use mock_inventory_source::MockInventorySource;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_table_view::MockTableView;
