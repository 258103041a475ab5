//! zkSync Era transaction provider
//!
//! Checks whether an address initiated at least one verified transaction on
//! zkSync Era, using the public block explorer.

pub mod api;
pub mod models;
pub mod providers;
pub mod utils;

pub use models::{ProviderOptions, RequestPayload, VerifiedPayload, VerifiedRecord};
pub use providers::{Provider, ZkSyncEraProvider};
pub use utils::ProviderError;
