//! CSV Analysis Service
//!
//! Streams a selected CSV file to the aggregation endpoint and adapts the
//! response body into [`AnalysisStreamEvent`]s on an mpsc channel. The pure
//! transform stages live in the core crate; this service owns only the
//! transport.

use futures_util::StreamExt;
use tokio::sync::mpsc;

use galactic_analytics_core::{transform_analysis_data, AnalysisError, AnalysisStreamEvent};

use crate::models::file::SelectedFile;

/// Streaming client for the remote aggregation endpoint.
pub struct CsvAnalysisService {
    client: reqwest::Client,
    api_host: String,
}

impl CsvAnalysisService {
    /// Create a service posting to `<api_host>/aggregate`.
    pub fn new(api_host: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_host: api_host.into(),
        }
    }

    fn aggregate_url(&self) -> String {
        format!("{}/aggregate", self.api_host)
    }

    /// Analyze one file, emitting events on `tx`.
    ///
    /// Emits at most one `Data` event (from the first non-empty chunk)
    /// followed by `Complete`, or exactly one terminal `Error`. Transport
    /// failures of every kind collapse into the generic parsing error;
    /// validation failures carry their typed error through unchanged.
    ///
    /// There is no cancellation token: starting a new call while one is
    /// outstanding yields two independent event sequences, and ordering
    /// between them is the caller's obligation.
    pub async fn analyze(&self, file: &SelectedFile, tx: mpsc::Sender<AnalysisStreamEvent>) {
        if let Err(error) = self.stream_analysis(file, &tx).await {
            tracing::warn!(file = %file.name, %error, "csv analysis failed");
            let _ = tx.send(AnalysisStreamEvent::Error { error }).await;
        }
    }

    async fn stream_analysis(
        &self,
        file: &SelectedFile,
        tx: &mpsc::Sender<AnalysisStreamEvent>,
    ) -> Result<(), AnalysisError> {
        let url = self.aggregate_url();
        tracing::debug!(file = %file.name, %url, "posting file for aggregation");

        let response = self
            .client
            .post(&url)
            .body(file.contents.clone())
            .send()
            .await
            .map_err(|_| AnalysisError::UnknownParsing)?;

        if !response.status().is_success() {
            return Err(AnalysisError::UnknownParsing);
        }

        let mut stream = response.bytes_stream();
        let mut delivered = false;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|_| AnalysisError::UnknownParsing)?;
            if delivered || chunk.is_empty() {
                // Single-record stream: everything after the first payload
                // chunk is drained, not aggregated.
                continue;
            }

            let transformed = transform_analysis_data(&chunk)?;
            let _ = tx
                .send(AnalysisStreamEvent::Data {
                    highlights: transformed.highlights,
                    highlights_to_store: transformed.highlights_to_store,
                })
                .await;
            delivered = true;
        }

        if !delivered {
            // A stream that never produced a payload is indistinguishable
            // from an absent body.
            return Err(AnalysisError::UnknownParsing);
        }

        let _ = tx.send(AnalysisStreamEvent::Complete).await;
        Ok(())
    }
}
