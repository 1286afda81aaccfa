//! Services
//!
//! Business logic: the streaming CSV analysis pipeline.

pub mod analysis;

pub use analysis::*;
