use thiserror::Error;
use super::signer::ResolveError;

/// Errors a provider returns instead of a verification result.
/// Remote failures never end up here; they become invalid results.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("Address resolution failed: {0}")]
    AddressResolution(#[from] ResolveError),
}
