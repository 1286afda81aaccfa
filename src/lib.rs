//! Galactic Analytics - Backend Library
//!
//! Client core for the intergalactic spend analytics service. It includes:
//! - The streaming CSV analysis pipeline over the aggregation endpoint
//! - The local analysis history store
//! - The in-memory analysis state shared with the UI layer
//! - Configuration, storage, and path utilities

pub mod models;
pub mod services;
pub mod state;
pub mod storage;
pub mod utils;

// Re-export commonly used items
pub use models::file::SelectedFile;
pub use models::history::{HistoryItem, NewHistoryItem};
pub use models::settings::{AppConfig, SettingsUpdate};
pub use services::analysis::CsvAnalysisService;
pub use state::{AnalysisState, AnalysisStatus};
pub use storage::{ConfigService, HistoryStore};
pub use utils::error::{AppError, AppResult};
