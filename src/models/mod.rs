//! Data models shared by providers
//!
//! Requests flow in as [`RequestPayload`], results flow out as [`VerifiedPayload`].

pub mod options;
pub mod payload;
pub mod verified;

pub use options::ProviderOptions;
pub use payload::{RequestPayload, SignerPayload};
pub use verified::{VerifiedPayload, VerifiedRecord};
