/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the dashboard core isolated.
mod output_format;
mod status_query;
mod table_snapshot;

pub use output_format::OutputFormat;
pub use status_query::{FilterFlag, HistoryAction, HistoryEntry, StatusQuery};
pub use table_snapshot::TableSnapshot;
