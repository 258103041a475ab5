use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Single transaction as returned by the explorer `transactions` endpoint.
/// Fields are kept as raw JSON so a record of unexpected shape only fails to
/// match instead of failing the whole page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZkSyncEraTransaction {
    #[serde(default)]
    pub initiator_address: Option<Value>,
    #[serde(default)]
    pub status: Option<Value>,
}

impl ZkSyncEraTransaction {
    pub const STATUS_VERIFIED: &'static str = "verified";

    /// True when the transaction is verified and was initiated by `address`.
    /// Both sides are compared as-is, the remote address is not normalized.
    pub fn is_verified_from(&self, address: &str) -> bool {
        self.status.as_ref().and_then(Value::as_str) == Some(Self::STATUS_VERIFIED)
            && self.initiator_address.as_ref().and_then(Value::as_str) == Some(address)
    }
}

/// One page of the explorer transaction list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ZkSyncEraResponse {
    pub list: Vec<ZkSyncEraTransaction>,
    #[serde(default)]
    pub total: u64,
}

/// Errors raised by the explorer HTTP client
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Any status other than 200
    #[error("HTTP Error '{status}'. Details: '{status_text}'.")]
    HttpStatus { status: u16, status_text: String },
    /// Network/request error
    #[error("Request Error: {0}")]
    RequestError(String),
    /// Deserialization error
    #[error("Deserialization Error: {0}")]
    DeserializationError(String),
}
