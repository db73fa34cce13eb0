//! Response body decode failures.

use thiserror::Error;

/// A response arrived but its body was not the JSON the caller expected.
#[derive(Debug, Error)]
#[error("Failed to decode HTTP {status} response body: {source}")]
pub struct DecodeError {
    /// Status of the response whose body failed to decode
    pub status: u16,
    #[source]
    pub source: serde_json::Error,
}

impl DecodeError {
    pub fn new(status: u16, source: serde_json::Error) -> Self {
        Self { status, source }
    }

    /// Short error code for logging.
    pub fn error_code(&self) -> &'static str {
        "E_DECODE"
    }
}
