//! Collaborator error taxonomy.
//!
//! The formatting and advisory core never fails. These errors belong to the
//! external services it consumes (chat model, weather feed, image classifier),
//! which report them here so the glue layers can log and substitute defaults.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected status code: {0}")]
    Status(u16),

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Service unavailable: {0}")]
    Unavailable(String),
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        ProviderError::MalformedPayload(err.to_string())
    }
}
