//! Inbound request payload

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Signer metadata attached by wallets that sign the request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignerPayload {
    pub challenge: String,
    pub signature: String,
    pub address: Option<String>,
}

/// Request handed to a provider by the aggregation layer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestPayload {
    #[serde(rename = "type")]
    pub provider_type: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signer: Option<SignerPayload>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proofs: Option<HashMap<String, String>>,
}

impl RequestPayload {
    pub fn new(provider_type: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            provider_type: provider_type.into(),
            address: address.into(),
            ..Default::default()
        }
    }
}
