//! Credential providers
//!
//! Each provider answers one question about an address and reports it as a
//! [`VerifiedPayload`]. The aggregation layer selects a provider by its type.

pub mod zksync_era;

use async_trait::async_trait;
use crate::models::{RequestPayload, VerifiedPayload};
use crate::utils::ProviderError;

pub use zksync_era::ZkSyncEraProvider;

#[async_trait]
pub trait Provider: Send + Sync {
    /// Discriminator the aggregation layer matches payloads against
    fn provider_type(&self) -> &'static str;

    async fn verify(&self, payload: &RequestPayload) -> Result<VerifiedPayload, ProviderError>;
}
