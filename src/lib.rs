//! pakket-status - build status dashboard for a Pakket inventory server
//!
//! Fetches the package inventory, infers the table layout from the payload,
//! filters and groups rows by version, and renders the status table. The
//! last inventory is kept in a local snapshot so the table can be rendered
//! before (or without) the network answering.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dashboard`): Inventory model, schema inference,
//!   filtering, version grouping and search debouncing
//! - **Application Layer** (`application`): The table controller, cache
//!   bookkeeping, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use pakket_status::prelude::*;
//!
//! # async fn example() -> Result<()> {
//! let mut controller = TableController::new(
//!     InMemoryCacheStore::new(),
//!     DocumentView::new(),
//!     Box::new(HtmlFormatter::new()),
//!     StderrProgressReporter::new(),
//!     StatusQuery::from_url("/status?broken=1"),
//! );
//!
//! controller.load_cached();
//! controller
//!     .refresh(&HttpInventoryClient::new("http://localhost:8080")?)
//!     .await;
//! println!("{}", controller.render_document()?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod dashboard;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::inbound::{InteractiveCommand, InteractiveSession};
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{HtmlFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::network::HttpInventoryClient;
    pub use crate::adapters::outbound::storage::{FileSystemCacheStore, InMemoryCacheStore};
    pub use crate::adapters::outbound::view::DocumentView;
    pub use crate::application::dto::{
        FilterFlag, HistoryAction, HistoryEntry, OutputFormat, StatusQuery, TableSnapshot,
    };
    pub use crate::application::use_cases::TableController;
    pub use crate::dashboard::domain::{
        Column, ColumnSchema, FilterState, Inventory, PackageId, PackageRecord, TableRow,
        VersionGroup,
    };
    pub use crate::dashboard::services::{
        Debouncer, FilterEngine, SchemaInferencer, VersionGrouper, VersionSelections,
    };
    pub use crate::ports::inbound::DashboardInteractionPort;
    pub use crate::ports::outbound::{
        CacheStore, InventorySource, OutputPresenter, ProgressReporter, TableFormatter, TableView,
    };
    pub use crate::shared::Result;
}
