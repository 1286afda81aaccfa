//! Integration Tests Module
//!
//! End-to-end coverage of the analysis pipeline against a mock aggregation
//! endpoint, including the state-container and history wiring the UI layer
//! performs around it.

mod analysis_pipeline_test;
