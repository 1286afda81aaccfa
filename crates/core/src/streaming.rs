//! Analysis Stream Events
//!
//! Unified event type emitted by the analysis pipeline while a response
//! stream is being processed. Shared between the service implementation and
//! the consumers that sequence UI state from it, so both sides agree on one
//! wire shape.

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::highlights::{AnalysisHighlight, Highlights};

/// Events produced by one `analyze` invocation.
///
/// `Data` fires at most once, followed by `Complete`. `Error` and `Complete`
/// are mutually exclusive terminal events. A superseded invocation keeps
/// emitting its own sequence; ordering across invocations is the caller's
/// obligation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnalysisStreamEvent {
    /// Transformed highlights from the first non-empty chunk
    Data {
        /// The summary record (row count stripped)
        highlights: Highlights,
        /// The eight display pairs for this analysis
        highlights_to_store: Vec<AnalysisHighlight>,
    },

    /// Terminal failure carrying the typed analysis error
    Error { error: AnalysisError },

    /// Stream finished after successful data delivery
    Complete,
}
