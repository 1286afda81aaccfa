//! Selected File Model
//!
//! The File-like object handed to the analysis pipeline by the UI
//! collaborator: a display name plus the raw bytes sent as the request body.

use std::path::Path;

use crate::utils::error::{AppError, AppResult};

/// The file chosen for analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    /// Display name, used for CSV classification and history entries
    pub name: String,
    /// Raw file contents
    pub contents: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, contents: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            contents,
        }
    }

    /// Read a file from disk, using its final path component as the name.
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                AppError::validation(format!("invalid file path: {}", path.display()))
            })?
            .to_string();
        let contents = std::fs::read(path)?;
        Ok(Self { name, contents })
    }
}
