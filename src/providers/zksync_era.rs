use async_trait::async_trait;
use tracing::debug;
use crate::api::zksync_era::{ApiError, TransactionSource, ZkSyncEraClient, ZkSyncEraResponse};
use crate::models::{ProviderOptions, RequestPayload, VerifiedPayload, VerifiedRecord};
use crate::utils::{AddressResolver, PayloadAddressResolver, ProviderError};
use super::Provider;

pub const NO_VERIFIED_TRANSACTION: &str = "Unable to find a verified transaction from the given address";
pub const TRANSACTION_LIST_FAILED: &str = "Error getting transaction list for address";

/// Verifies that an address initiated at least one verified zkSync Era transaction
pub struct ZkSyncEraProvider {
    options: ProviderOptions,
    source: Box<dyn TransactionSource>,
    resolver: Box<dyn AddressResolver>,
}

impl ZkSyncEraProvider {
    pub const PROVIDER_TYPE: &'static str = "ZkSyncEra";

    /// Create a provider backed by the public explorer.
    /// `options` are merged onto the (empty) defaults and kept as-is.
    pub fn new(options: ProviderOptions) -> Self {
        Self {
            options: ProviderOptions::default().merged(options),
            source: Box::new(ZkSyncEraClient::new()),
            resolver: Box::new(PayloadAddressResolver),
        }
    }

    pub fn with_source(mut self, source: impl TransactionSource + 'static) -> Self {
        self.source = Box::new(source);
        self
    }

    pub fn with_resolver(mut self, resolver: impl AddressResolver + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    pub fn options(&self) -> &ProviderOptions {
        &self.options
    }

    /// Map one explorer lookup onto a verification result
    fn evaluate(address: String, page: Result<ZkSyncEraResponse, ApiError>) -> VerifiedPayload {
        match page {
            Ok(page) => {
                if page.list.iter().any(|t| t.is_verified_from(&address)) {
                    VerifiedPayload::valid(VerifiedRecord { address })
                } else {
                    VerifiedPayload::invalid(vec![NO_VERIFIED_TRANSACTION.to_string()])
                }
            }
            Err(err @ ApiError::HttpStatus { .. }) => VerifiedPayload::invalid(vec![err.to_string()]),
            Err(err) => {
                debug!("Transaction lookup for {} failed: {}", address, err);
                VerifiedPayload::invalid(vec![TRANSACTION_LIST_FAILED.to_string()])
            }
        }
    }
}

impl Default for ZkSyncEraProvider {
    fn default() -> Self {
        Self::new(ProviderOptions::default())
    }
}

#[async_trait]
impl Provider for ZkSyncEraProvider {
    fn provider_type(&self) -> &'static str {
        Self::PROVIDER_TYPE
    }

    async fn verify(&self, payload: &RequestPayload) -> Result<VerifiedPayload, ProviderError> {
        let address = self.resolver.resolve(payload).await?.to_lowercase();

        let page = self.source.list_transactions(&address).await;
        let result = Self::evaluate(address, page);

        debug!("ZkSyncEra verification valid={}", result.is_valid());
        Ok(result)
    }
}
