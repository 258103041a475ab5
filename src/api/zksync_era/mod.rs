pub mod client;
pub mod models;

pub use client::{TransactionSource, ZkSyncEraClient};
pub use models::{ApiError, ZkSyncEraResponse, ZkSyncEraTransaction};
