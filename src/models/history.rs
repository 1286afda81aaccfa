//! History Models
//!
//! Data structures for the persisted analysis history. Field names on the
//! wire match the stored JSON layout (`id`, `timestamp`, `fileName`,
//! optional `highlights`).

use galactic_analytics_core::Highlights;
use serde::{Deserialize, Serialize};

/// A persisted record of one past analysis attempt, successful or failed.
///
/// Immutable once created; removed individually by id or in bulk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    /// Unique id assigned by the store
    pub id: String,
    /// Creation time in epoch milliseconds
    pub timestamp: i64,
    /// Name of the analyzed file
    pub file_name: String,
    /// Present only when the analysis succeeded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlights: Option<Highlights>,
}

impl HistoryItem {
    /// Whether the recorded analysis produced highlights.
    pub fn is_successful(&self) -> bool {
        self.highlights.is_some()
    }
}

/// Caller-supplied fields for a new history entry; the store assigns the id
/// and timestamp.
#[derive(Debug, Clone, Default)]
pub struct NewHistoryItem {
    pub file_name: String,
    pub highlights: Option<Highlights>,
}
