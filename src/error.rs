//! Error taxonomy
//!
//! Every failure the service can produce is a client error, detected at
//! the boundary before the classifier runs. There is no server-fault
//! category in the core path: once bytes are decoded, classification
//! cannot fail.

use thiserror::Error;

/// Client-facing failures, each mapped to one HTTP status.
#[derive(Debug, Error)]
pub enum DetectError {
    /// Credential header missing or not on the allow-list.
    #[error("invalid API key")]
    InvalidApiKey,

    /// Payload was not valid base64 within the decoded prefix.
    #[error("invalid audio payload: {0}")]
    InvalidAudio(#[from] base64::DecodeError),

    /// Request body was not valid JSON for the detect schema.
    #[error("invalid request body: {0}")]
    InvalidRequest(#[from] serde_json::Error),
}

impl DetectError {
    /// HTTP status this error surfaces as.
    pub fn status_code(&self) -> u16 {
        match self {
            DetectError::InvalidApiKey => 401,
            DetectError::InvalidAudio(_) | DetectError::InvalidRequest(_) => 400,
        }
    }
}
