use async_trait::async_trait;
use hyper::ext::ReasonPhrase;
use reqwest::{Client as HttpClient, StatusCode};
use super::models::{ApiError, ZkSyncEraResponse};
use tracing::{debug, warn};

/// Anything that can produce the most recent transaction page for an address
#[async_trait]
pub trait TransactionSource: Send + Sync {
    async fn list_transactions(&self, address: &str) -> Result<ZkSyncEraResponse, ApiError>;
}

/// zkSync Era block explorer API client
#[derive(Debug, Clone)]
pub struct ZkSyncEraClient {
    http_client: HttpClient,
    base_url: String,
}

impl ZkSyncEraClient {
    /// Endpoint used by the Era Explorer
    pub const DEFAULT_BASE_URL: &'static str = "https://zksync2-mainnet-explorer.zksync.io/";

    /// Transactions fetched per lookup. Only the first page is ever read.
    pub const PAGE_LIMIT: u32 = 100;

    pub fn new() -> Self {
        Self::with_base_url(Self::DEFAULT_BASE_URL.to_string())
    }

    /// Create a new client with custom base URL (for testing)
    pub fn with_base_url(base_url: String) -> Self {
        let base_url = if base_url.ends_with('/') {
            base_url
        } else {
            format!("{}/", base_url)
        };

        Self {
            http_client: HttpClient::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Reason phrase as sent by the server. hyper only keeps it when it differs
    /// from the canonical one, so fall back to that.
    fn status_text(response: &reqwest::Response) -> String {
        match response.extensions().get::<ReasonPhrase>() {
            Some(phrase) => String::from_utf8_lossy(phrase.as_bytes()).to_string(),
            None => response
                .status()
                .canonical_reason()
                .unwrap_or_default()
                .to_string(),
        }
    }

    /// GET /transactions
    ///
    /// Fetches the newest page of transactions touching `address`, walking
    /// in the `older` direction.
    ///
    /// # Returns
    /// * `Ok(ZkSyncEraResponse)` - The page as returned by the explorer
    /// * `Err(ApiError)` - Non-200 status, transport failure or unparsable body
    pub async fn get_transactions(&self, address: &str) -> Result<ZkSyncEraResponse, ApiError> {
        let url = format!("{}transactions", self.base_url);
        let limit = Self::PAGE_LIMIT.to_string();

        debug!("Fetching zkSync Era transactions for {}", address);

        let response = self.http_client
            .get(&url)
            .query(&[
                ("limit", limit.as_str()),
                ("direction", "older"),
                ("accountAddress", address),
            ])
            .send()
            .await
            .map_err(|e| ApiError::RequestError(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status != StatusCode::OK {
            let status_text = Self::status_text(&response);
            warn!("zkSync Era explorer returned {} '{}' for {}", status.as_u16(), status_text, address);
            return Err(ApiError::HttpStatus {
                status: status.as_u16(),
                status_text,
            });
        }

        response
            .json::<ZkSyncEraResponse>()
            .await
            .map_err(|e| ApiError::DeserializationError(format!("Failed to parse response: {}", e)))
    }
}

impl Default for ZkSyncEraClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TransactionSource for ZkSyncEraClient {
    async fn list_transactions(&self, address: &str) -> Result<ZkSyncEraResponse, ApiError> {
        self.get_transactions(address).await
    }
}
