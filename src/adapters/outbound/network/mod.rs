/// Network adapters for the inventory server
mod inventory_client;

pub use inventory_client::{HttpInventoryClient, INFO_ENDPOINT, PACKAGES_ENDPOINT};
