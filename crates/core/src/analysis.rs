//! Analysis Transform Pipeline
//!
//! Pure stages of the CSV analysis pipeline: file classification, server
//! response validation, and the bytes-to-highlights transform applied to the
//! first streamed chunk. The network half lives in the application crate's
//! analysis service.

use serde_json::Value;

use crate::error::{AnalysisError, AnalysisResult};
use crate::highlights::{convert_highlights_to_array, AnalysisHighlight, Highlights};

/// The nine keys every valid server response must carry.
const REQUIRED_KEYS: [&str; 9] = [
    "total_spend_galactic",
    "rows_affected",
    "less_spent_at",
    "big_spent_at",
    "less_spent_value",
    "big_spent_value",
    "average_spend_galactic",
    "big_spent_civ",
    "less_spent_civ",
];

/// Classify a file as CSV by its extension, case-insensitively.
///
/// Only the file name matters; the declared MIME type is ignored.
pub fn is_csv_file(name: &str) -> bool {
    name.to_ascii_lowercase().ends_with(".csv")
}

/// Validate a decoded server response against the required highlight keys.
///
/// Returns `Ok(true)` when every required key is present and non-null, and
/// `Ok(false)` when the record carries none of them (or is not an object).
/// A required key that is present but null fails with
/// [`AnalysisError::InvalidServerResponse`], distinguishing a
/// structurally-present-but-invalid payload from one that is missing
/// entirely.
pub fn validate_server_response(response: &Value) -> AnalysisResult<bool> {
    let Some(map) = response.as_object() else {
        return Ok(false);
    };

    let mut present = 0usize;
    for key in REQUIRED_KEYS {
        match map.get(key) {
            Some(Value::Null) => {
                return Err(AnalysisError::invalid_response(format!(
                    "required key `{key}` is null"
                )));
            }
            Some(_) => present += 1,
            None => {}
        }
    }

    Ok(present == REQUIRED_KEYS.len())
}

/// Result of transforming the first streamed chunk of an analysis response.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformedAnalysis {
    /// The summary record, with the row count stripped
    pub highlights: Highlights,
    /// The eight display pairs persisted and shown for this analysis
    pub highlights_to_store: Vec<AnalysisHighlight>,
}

/// Decode, parse, validate, and project one chunk of analysis response data.
///
/// Only the first newline-delimited JSON record is consumed. Empty input,
/// malformed JSON, a record missing the required keys, and a null required
/// key all surface as [`AnalysisError::InvalidServerResponse`]. The output
/// is deterministic for a given byte input.
pub fn transform_analysis_data(data: &[u8]) -> AnalysisResult<TransformedAnalysis> {
    let text = std::str::from_utf8(data).map_err(|e| {
        AnalysisError::invalid_response(format!("response is not valid UTF-8: {e}"))
    })?;

    let record = text
        .split('\n')
        .next()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .ok_or_else(|| AnalysisError::invalid_response("empty response chunk"))?;

    let value: Value = serde_json::from_str(record)
        .map_err(|e| AnalysisError::invalid_response(format!("malformed JSON record: {e}")))?;

    if !validate_server_response(&value)? {
        return Err(AnalysisError::invalid_response(
            "response is missing the required highlight keys",
        ));
    }

    let mut highlights: Highlights = serde_json::from_value(value)
        .map_err(|e| AnalysisError::invalid_response(format!("unexpected field type: {e}")))?;

    // The row count is display-only; the record handed to consumers and
    // persisted in history drops it.
    highlights.rows_affected = None;
    let highlights_to_store = convert_highlights_to_array(&highlights);

    Ok(TransformedAnalysis {
        highlights,
        highlights_to_store,
    })
}
