//! Galactic Analytics Core
//!
//! Shared foundation for the Galactic Analytics workspace: the wire data
//! model returned by the aggregation endpoint, response validation, the
//! chunk transform pipeline, highlight formatting, and the unified stream
//! event type consumed by the application layer.
//!
//! This crate is dependency-light (serde + thiserror + std) so that both the
//! service implementation and any future frontend bridge can share these
//! types without pulling in the network stack.

pub mod analysis;
pub mod error;
pub mod highlights;
pub mod streaming;

pub use analysis::{
    is_csv_file, transform_analysis_data, validate_server_response, TransformedAnalysis,
};
pub use error::{AnalysisError, AnalysisResult};
pub use highlights::{convert_highlights_to_array, AnalysisHighlight, Highlights};
pub use streaming::AnalysisStreamEvent;
