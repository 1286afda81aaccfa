//! Analysis Error Types
//!
//! Error types shared between the transform pipeline and the streaming
//! service. `InvalidServerResponse` is the typed validation failure that is
//! surfaced to callers verbatim; every transport-level failure is collapsed
//! into the single generic `UnknownParsing` message before it crosses the
//! event boundary, so no transport detail leaks into the UI.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while analyzing a CSV file.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum AnalysisError {
    /// The payload was structurally present but semantically invalid: a
    /// required key was null, the record failed validation, or the chunk
    /// could not be decoded as a JSON record.
    #[error("Invalid server response: {0}")]
    InvalidServerResponse(String),

    /// Any transport failure: non-2xx status, absent response body, or a
    /// network error. A single message by contract, with no further detail.
    #[error("Unknown parsing error")]
    UnknownParsing,
}

/// Result type alias for analysis errors
pub type AnalysisResult<T> = Result<T, AnalysisError>;

impl AnalysisError {
    /// Create an invalid-server-response error
    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidServerResponse(msg.into())
    }
}
