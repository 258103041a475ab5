//! Verification result models

use serde::{Deserialize, Serialize};

/// Record attached to a successful verification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedRecord {
    pub address: String,
}

/// Outcome of a provider verification.
///
/// `record` is present exactly when the payload is valid and `error` exactly
/// when it is not; the constructors are the only way to build one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedPayload {
    valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    record: Option<VerifiedRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<Vec<String>>,
}

impl VerifiedPayload {
    pub fn valid(record: VerifiedRecord) -> Self {
        Self {
            valid: true,
            record: Some(record),
            error: None,
        }
    }

    pub fn invalid(error: Vec<String>) -> Self {
        Self {
            valid: false,
            record: None,
            error: Some(error),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn record(&self) -> Option<&VerifiedRecord> {
        self.record.as_ref()
    }

    pub fn error(&self) -> Option<&[String]> {
        self.error.as_deref()
    }
}
