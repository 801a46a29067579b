/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the dashboard core uses
/// to interact with external systems (network, local storage, page, console).
pub mod cache_store;
pub mod inventory_source;
pub mod output_presenter;
pub mod progress_reporter;
pub mod table_formatter;
pub mod table_view;

pub use cache_store::CacheStore;
pub use inventory_source::InventorySource;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use table_formatter::TableFormatter;
pub use table_view::TableView;
