//! Analysis State
//!
//! In-memory coordination point between the analysis pipeline's events and
//! the UI layer. A passive record: it enforces no transition graph, performs
//! no I/O, and relies on the caller to sequence
//! processing -> completed | error.

use galactic_analytics_core::AnalysisHighlight;
use serde::{Deserialize, Serialize};

use crate::models::file::SelectedFile;

/// Lifecycle status of the current analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStatus {
    Idle,
    Processing,
    Completed,
    Error,
}

/// Mutable analysis state shared with the UI layer.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisState {
    file: Option<SelectedFile>,
    status: AnalysisStatus,
    highlights: Vec<AnalysisHighlight>,
    error: Option<String>,
}

impl AnalysisState {
    pub fn new() -> Self {
        Self {
            file: None,
            status: AnalysisStatus::Idle,
            highlights: Vec::new(),
            error: None,
        }
    }

    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn status(&self) -> AnalysisStatus {
        self.status
    }

    pub fn highlights(&self) -> &[AnalysisHighlight] {
        &self.highlights
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Replace the selected file. Always clears any previous error; status
    /// and highlights are left untouched.
    pub fn set_file(&mut self, file: Option<SelectedFile>) {
        self.file = file;
        self.error = None;
    }

    pub fn set_status(&mut self, status: AnalysisStatus) {
        self.status = status;
    }

    pub fn set_highlights(&mut self, highlights: Vec<AnalysisHighlight>) {
        self.highlights = highlights;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    /// Restore every field to its initial value.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for AnalysisState {
    fn default() -> Self {
        Self::new()
    }
}
