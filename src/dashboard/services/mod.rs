mod debouncer;
mod filter_engine;
mod schema_inferencer;
mod version_grouper;

pub use debouncer::{Clock, Debouncer, SystemClock, SEARCH_DEBOUNCE};
pub use filter_engine::FilterEngine;
pub use schema_inferencer::{is_runtime_version_key, SchemaDrift, SchemaInferencer};
pub use version_grouper::{VersionGrouper, VersionSelections};
