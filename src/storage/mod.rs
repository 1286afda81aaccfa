//! Storage Layer
//!
//! Handles all data persistence: the analysis history document and the JSON
//! configuration file.

pub mod config;
pub mod history;

pub use config::*;
pub use history::*;
