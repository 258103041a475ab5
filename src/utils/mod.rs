pub mod errors;
pub mod signer;

pub use errors::ProviderError;
pub use signer::{AddressResolver, PayloadAddressResolver, ResolveError};
