use crate::shared::Result;
use async_trait::async_trait;
use serde_json::Value;

/// InventorySource port for the backend inventory endpoints
///
/// Implementations must be `Send + Sync` so both requests can be issued
/// concurrently.
#[async_trait]
pub trait InventorySource: Send + Sync {
    /// Fetches the full package inventory (`GET /all_packages`)
    ///
    /// # Returns
    /// The decoded payload, a JSON object keyed by `"<name>=<version>"`
    ///
    /// # Errors
    /// Returns an error if the request fails, the status is not a success,
    /// or the body is not JSON
    async fn fetch_packages(&self) -> Result<Value>;

    /// Fetches server information (`GET /info`), which carries the product
    /// version in its `version` field
    async fn fetch_info(&self) -> Result<Value>;
}
