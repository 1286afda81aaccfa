//! Cross-Platform Path Utilities
//!
//! Functions for resolving the application's data directory and the files
//! stored inside it (~/.galactic-analytics/).

use std::path::PathBuf;

use crate::utils::error::{AppError, AppResult};

/// Get the user's home directory
pub fn home_dir() -> AppResult<PathBuf> {
    dirs::home_dir().ok_or_else(|| AppError::config("Could not determine home directory"))
}

/// Get the Galactic Analytics directory (~/.galactic-analytics/)
pub fn galactic_analytics_dir() -> AppResult<PathBuf> {
    Ok(home_dir()?.join(".galactic-analytics"))
}

/// Get the config file path (~/.galactic-analytics/config.json)
pub fn config_path() -> AppResult<PathBuf> {
    Ok(galactic_analytics_dir()?.join("config.json"))
}

/// Get the history file path (~/.galactic-analytics/tableHistory.json)
pub fn history_path() -> AppResult<PathBuf> {
    Ok(galactic_analytics_dir()?.join("tableHistory.json"))
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &PathBuf) -> AppResult<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Get the Galactic Analytics directory, creating if it doesn't exist
pub fn ensure_galactic_analytics_dir() -> AppResult<PathBuf> {
    let path = galactic_analytics_dir()?;
    ensure_dir(&path)?;
    Ok(path)
}
