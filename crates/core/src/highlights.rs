//! Highlights Data Model and Formatting
//!
//! `Highlights` is the summary-statistics record returned by the aggregation
//! endpoint; `convert_highlights_to_array` projects it into the ordered
//! display pairs shown to the user and persisted alongside history entries.

use serde::{Deserialize, Serialize};

/// Summary statistics for one analyzed CSV file.
///
/// All nine keys are required on the wire (see
/// [`validate_server_response`](crate::analysis::validate_server_response),
/// which runs on the raw JSON before typed deserialization). `rows_affected`
/// is optional in the type because the transform pipeline strips it from the
/// record it hands to consumers; a record deserialized straight from the
/// wire always carries it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlights {
    /// Total spend across all rows
    pub total_spend_galactic: f64,
    /// Number of CSV rows aggregated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows_affected: Option<u64>,
    /// Day index with the smallest spend
    pub less_spent_at: u32,
    /// Day index with the largest spend
    pub big_spent_at: u32,
    /// Smallest single-day spend value
    pub less_spent_value: f64,
    /// Largest single-day spend value
    pub big_spent_value: f64,
    /// Average spend per row
    pub average_spend_galactic: f64,
    /// Civilization with the largest spend
    pub big_spent_civ: String,
    /// Civilization with the smallest spend
    pub less_spent_civ: String,
}

/// A single `{title, description}` display pair derived from a
/// [`Highlights`] record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisHighlight {
    pub title: String,
    pub description: String,
}

impl AnalysisHighlight {
    fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Round half away from zero and render as a plain decimal string, with no
/// separators or currency symbol.
fn rounded(value: f64) -> String {
    format!("{}", value.round() as i64)
}

/// Project a [`Highlights`] record into its ordered display pairs.
///
/// A full wire record yields exactly nine pairs in a fixed order. The
/// row-count pair is emitted only when `rows_affected` is present, which is
/// how the transform pipeline's eight-pair display projection falls out.
/// There is no failure path.
pub fn convert_highlights_to_array(highlights: &Highlights) -> Vec<AnalysisHighlight> {
    let mut items = vec![AnalysisHighlight::new(
        rounded(highlights.total_spend_galactic),
        "Total spend",
    )];
    if let Some(rows) = highlights.rows_affected {
        items.push(AnalysisHighlight::new(rows.to_string(), "Rows affected"));
    }
    items.push(AnalysisHighlight::new(
        highlights.less_spent_at.to_string(),
        "Least-spent day",
    ));
    items.push(AnalysisHighlight::new(
        highlights.big_spent_at.to_string(),
        "Biggest-spent day",
    ));
    items.push(AnalysisHighlight::new(
        rounded(highlights.less_spent_value),
        "Minimum spend",
    ));
    items.push(AnalysisHighlight::new(
        rounded(highlights.big_spent_value),
        "Maximum spend",
    ));
    items.push(AnalysisHighlight::new(
        rounded(highlights.average_spend_galactic),
        "Average spend",
    ));
    items.push(AnalysisHighlight::new(
        highlights.less_spent_civ.clone(),
        "Least-spending civilization",
    ));
    items.push(AnalysisHighlight::new(
        highlights.big_spent_civ.clone(),
        "Biggest-spending civilization",
    ));
    items
}
