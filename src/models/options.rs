//! Provider construction options

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Free-form options handed to a provider at construction.
/// Stored as-is; no key changes how a provider verifies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderOptions(Map<String, Value>);

impl ProviderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Shallow merge of `overrides` onto `self`; keys from `overrides` win
    pub fn merged(mut self, overrides: ProviderOptions) -> Self {
        self.0.extend(overrides.0);
        self
    }
}
