//! Frontend Models
//!
//! Item pool, fetch errors and the view state machine.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Why loading the item pool failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Request could not be sent or the promise rejected
    #[error("network error: {0}")]
    Network(String),
    /// Response body was not JSON
    #[error("decode error: {0}")]
    Decode(String),
    /// JSON was valid but not an array of strings
    #[error("malformed payload: expected an array of strings")]
    MalformedPayload,
}

/// All candidate item names, in the order the source returned them
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ItemPool(Vec<String>);

impl ItemPool {
    /// Validate a decoded JSON payload.
    /// Anything other than an array of strings is malformed.
    pub fn from_payload(payload: Value) -> Result<Self, FetchError> {
        serde_json::from_value(payload).map_err(|_| FetchError::MalformedPayload)
    }

    pub fn items(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Top-level view state. Loading moves to Error or Ready exactly once.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewState {
    #[default]
    Loading,
    Error(FetchError),
    Ready(ItemPool),
}

impl ViewState {
    pub fn from_fetch(result: Result<ItemPool, FetchError>) -> Self {
        match result {
            Ok(pool) => Self::Ready(pool),
            Err(e) => Self::Error(e),
        }
    }

    /// Apply a fetch result. Only Loading accepts it; Error and Ready are final.
    pub fn resolve(&mut self, result: Result<ItemPool, FetchError>) {
        if matches!(self, Self::Loading) {
            *self = Self::from_fetch(result);
        }
    }
}
