//! Clients for third-party explorer APIs

pub mod zksync_era;
