use async_trait::async_trait;
use thiserror::Error;
use crate::models::RequestPayload;

/// Address resolution errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Request payload carries no address")]
    MissingAddress,
    #[error("Unable to resolve address: {0}")]
    Rejected(String),
}

/// Turns a request payload into the address a provider should check
#[async_trait]
pub trait AddressResolver: Send + Sync {
    async fn resolve(&self, payload: &RequestPayload) -> Result<String, ResolveError>;
}

/// Takes the address straight from the payload.
/// Signature checks happen upstream, before the payload reaches a provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct PayloadAddressResolver;

#[async_trait]
impl AddressResolver for PayloadAddressResolver {
    async fn resolve(&self, payload: &RequestPayload) -> Result<String, ResolveError> {
        if payload.address.is_empty() {
            return Err(ResolveError::MissingAddress);
        }
        Ok(payload.address.clone())
    }
}
