use crate::ports::outbound::InventorySource;
use crate::shared::error::DashboardError;
use crate::shared::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

/// Endpoint serving the full package inventory
pub const PACKAGES_ENDPOINT: &str = "/all_packages";

/// Endpoint serving server information
pub const INFO_ENDPOINT: &str = "/info";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HttpInventoryClient adapter for the inventory server's JSON endpoints
///
/// Requests are attempted once. A failed refresh leaves the cached rendering
/// in place, so there is nothing to gain from retrying.
pub struct HttpInventoryClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpInventoryClient {
    /// Creates a client for the server at `base_url`
    ///
    /// # Errors
    /// Returns an error if the URL is not http(s) or the HTTP client cannot
    /// be built
    pub fn new(base_url: &str) -> Result<Self> {
        Self::validate_base_url(base_url)?;

        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("pakket-status/{}", version);
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn validate_base_url(base_url: &str) -> Result<()> {
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(DashboardError::Validation {
                message: format!(
                    "Base URL must start with http:// or https://, got '{}'",
                    base_url
                ),
            }
            .into());
        }
        Ok(())
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    async fn fetch_json(&self, endpoint: &str) -> Result<Value> {
        let url = self.endpoint_url(endpoint);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(DashboardError::EndpointStatus {
                url,
                status: response.status().as_u16(),
            }
            .into());
        }

        let body: Value = response.json().await?;
        Ok(body)
    }
}

#[async_trait]
impl InventorySource for HttpInventoryClient {
    async fn fetch_packages(&self) -> Result<Value> {
        self.fetch_json(PACKAGES_ENDPOINT).await
    }

    async fn fetch_info(&self) -> Result<Value> {
        self.fetch_json(INFO_ENDPOINT).await
    }
}
