/// Use cases module containing application business logic orchestration
pub mod inventory_cache;
mod table_controller;

pub use inventory_cache::{Revalidation, SnapshotCache, INVENTORY_CACHE_KEY, VERSION_CACHE_KEY};
pub use table_controller::TableController;
