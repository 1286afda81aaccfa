//! Analysis History Store
//!
//! A single JSON array document holds every past analysis, newest first.
//! Reads self-heal: an absent or undecodable file is an empty history.
//! Writes never hide failures from the caller. The document is
//! read-modify-write with no cross-process locking; the last writer wins.

use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use uuid::Uuid;

use crate::models::history::{HistoryItem, NewHistoryItem};
use crate::utils::error::AppResult;
use crate::utils::paths::{ensure_galactic_analytics_dir, history_path};

/// Store for the persisted analysis history
#[derive(Debug)]
pub struct HistoryStore {
    history_path: PathBuf,
}

impl HistoryStore {
    /// Create a store over the default history file, ensuring the data
    /// directory exists
    pub fn new() -> AppResult<Self> {
        ensure_galactic_analytics_dir()?;
        Ok(Self {
            history_path: history_path()?,
        })
    }

    /// Create a store over an explicit file path
    pub fn at_path(history_path: PathBuf) -> Self {
        Self { history_path }
    }

    /// Read the full history, newest first.
    ///
    /// An absent file and malformed content both read as an empty history;
    /// read-path corruption is never surfaced as an error.
    pub fn get_history(&self) -> Vec<HistoryItem> {
        let Ok(content) = fs::read_to_string(&self.history_path) else {
            return Vec::new();
        };
        serde_json::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!("discarding undecodable history content: {}", e);
            Vec::new()
        })
    }

    /// Prepend a new entry, assigning its id and timestamp, and return it.
    ///
    /// Write failures propagate to the caller.
    pub fn add_to_history(&self, item: NewHistoryItem) -> AppResult<HistoryItem> {
        let created = HistoryItem {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now().timestamp_millis(),
            file_name: item.file_name,
            highlights: item.highlights,
        };

        let mut history = self.get_history();
        history.insert(0, created.clone());
        self.write_history(&history)?;

        Ok(created)
    }

    /// Remove the entry with the given id. Unknown ids are a silent no-op;
    /// write failures propagate.
    pub fn remove_from_history(&self, id: &str) -> AppResult<()> {
        let mut history = self.get_history();
        history.retain(|item| item.id != id);
        self.write_history(&history)
    }

    /// Delete the entire history document. Deleting an absent history is a
    /// success; other failures propagate.
    pub fn clear_history(&self) -> AppResult<()> {
        match fs::remove_file(&self.history_path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_history(&self, history: &[HistoryItem]) -> AppResult<()> {
        let content = serde_json::to_string(history)?;
        fs::write(&self.history_path, content)?;
        Ok(())
    }
}
