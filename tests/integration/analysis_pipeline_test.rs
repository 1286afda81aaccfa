//! Analysis Pipeline Integration Tests
//!
//! Drives `CsvAnalysisService` against a wiremock aggregation endpoint and
//! asserts the event contract: one `Data` then `Complete` on success, exactly
//! one generic `Error` for every transport failure, and the typed validation
//! error for structurally invalid payloads.

use tokio::sync::mpsc;
use wiremock::matchers::{body_bytes, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use galactic_analytics::{
    AnalysisState, AnalysisStatus, CsvAnalysisService, HistoryStore, NewHistoryItem, SelectedFile,
};
use galactic_analytics_core::{AnalysisError, AnalysisStreamEvent};

const CSV_BODY: &[u8] = b"civilization,date,amount\nGalactic Empire,2024-01-01,50000\n";

fn csv_file() -> SelectedFile {
    SelectedFile::new("test.csv", CSV_BODY.to_vec())
}

fn response_json() -> String {
    concat!(
        "{\"total_spend_galactic\":1000000,",
        "\"rows_affected\":10000,",
        "\"less_spent_at\":45,",
        "\"big_spent_at\":180,",
        "\"less_spent_value\":100,",
        "\"big_spent_value\":50000,",
        "\"average_spend_galactic\":1000,",
        "\"big_spent_civ\":\"Galactic Empire\",",
        "\"less_spent_civ\":\"Rebel Alliance\"}\n"
    )
    .to_string()
}

async fn collect_events(service: &CsvAnalysisService, file: &SelectedFile) -> Vec<AnalysisStreamEvent> {
    let (tx, mut rx) = mpsc::channel(16);
    service.analyze(file, tx).await;

    let mut events = Vec::new();
    while let Some(event) = rx.recv().await {
        events.push(event);
    }
    events
}

#[tokio::test]
async fn successful_analysis_emits_data_then_complete() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/aggregate"))
        .and(body_bytes(CSV_BODY.to_vec()))
        .respond_with(ResponseTemplate::new(200).set_body_raw(response_json(), "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let service = CsvAnalysisService::new(server.uri());
    let events = collect_events(&service, &csv_file()).await;

    assert_eq!(events.len(), 2);
    match &events[0] {
        AnalysisStreamEvent::Data {
            highlights,
            highlights_to_store,
        } => {
            assert_eq!(highlights.total_spend_galactic, 1_000_000.0);
            assert_eq!(highlights.rows_affected, None);
            assert_eq!(highlights.big_spent_civ, "Galactic Empire");
            assert_eq!(highlights.less_spent_civ, "Rebel Alliance");
            assert_eq!(highlights_to_store.len(), 8);
        }
        other => panic!("expected Data event, got {other:?}"),
    }
    assert_eq!(events[1], AnalysisStreamEvent::Complete);
}

#[tokio::test]
async fn http_error_collapses_to_generic_parsing_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/aggregate"))
        .respond_with(ResponseTemplate::new(400).set_body_string("{\"error\":\"bad file\"}"))
        .expect(1)
        .mount(&server)
        .await;

    let service = CsvAnalysisService::new(server.uri());
    let events = collect_events(&service, &csv_file()).await;

    assert_eq!(
        events,
        vec![AnalysisStreamEvent::Error {
            error: AnalysisError::UnknownParsing,
        }]
    );
    assert_eq!(
        AnalysisError::UnknownParsing.to_string(),
        "Unknown parsing error"
    );
}

#[tokio::test]
async fn empty_body_collapses_to_generic_parsing_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/aggregate"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let service = CsvAnalysisService::new(server.uri());
    let events = collect_events(&service, &csv_file()).await;

    assert_eq!(
        events,
        vec![AnalysisStreamEvent::Error {
            error: AnalysisError::UnknownParsing,
        }]
    );
}

#[tokio::test]
async fn network_failure_collapses_to_generic_parsing_error() {
    // Nothing is listening on this address.
    let service = CsvAnalysisService::new("http://127.0.0.1:9");
    let events = collect_events(&service, &csv_file()).await;

    assert_eq!(
        events,
        vec![AnalysisStreamEvent::Error {
            error: AnalysisError::UnknownParsing,
        }]
    );
}

#[tokio::test]
async fn invalid_payload_surfaces_typed_validation_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/aggregate"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("{\"invalid_field\":\"some value\"}\n", "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let service = CsvAnalysisService::new(server.uri());
    let events = collect_events(&service, &csv_file()).await;

    assert_eq!(events.len(), 1);
    assert!(matches!(
        &events[0],
        AnalysisStreamEvent::Error {
            error: AnalysisError::InvalidServerResponse(_),
        }
    ));
}

#[tokio::test]
async fn null_required_key_surfaces_typed_validation_error() {
    let body = response_json().replace("\"rows_affected\":10000", "\"rows_affected\":null");

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/aggregate"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let service = CsvAnalysisService::new(server.uri());
    let events = collect_events(&service, &csv_file()).await;

    assert_eq!(events.len(), 1);
    assert!(matches!(
        &events[0],
        AnalysisStreamEvent::Error {
            error: AnalysisError::InvalidServerResponse(_),
        }
    ));
}

/// The wiring the UI layer performs around the pipeline: state transitions
/// and history recording for a successful run.
#[tokio::test]
async fn full_flow_records_successful_analysis() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/aggregate"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(response_json(), "application/json"))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let store = HistoryStore::at_path(dir.path().join("tableHistory.json"));
    let service = CsvAnalysisService::new(server.uri());
    let file = csv_file();

    let mut state = AnalysisState::new();
    state.set_file(Some(file.clone()));
    state.set_status(AnalysisStatus::Processing);

    let mut record_highlights = None;
    for event in collect_events(&service, &file).await {
        match event {
            AnalysisStreamEvent::Data {
                highlights,
                highlights_to_store,
            } => {
                state.set_highlights(highlights_to_store);
                record_highlights = Some(highlights);
            }
            AnalysisStreamEvent::Complete => state.set_status(AnalysisStatus::Completed),
            AnalysisStreamEvent::Error { error } => {
                state.set_error(Some(error.to_string()));
                state.set_status(AnalysisStatus::Error);
            }
        }
    }

    assert_eq!(state.status(), AnalysisStatus::Completed);
    assert_eq!(state.highlights().len(), 8);
    assert_eq!(state.error(), None);

    let item = store
        .add_to_history(NewHistoryItem {
            file_name: file.name.clone(),
            highlights: record_highlights,
        })
        .unwrap();
    assert!(item.is_successful());

    let history = store.get_history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].file_name, "test.csv");
}

/// Failed analyses are still recorded in history, without highlights.
#[tokio::test]
async fn full_flow_records_failed_analysis() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/aggregate"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let store = HistoryStore::at_path(dir.path().join("tableHistory.json"));
    let service = CsvAnalysisService::new(server.uri());
    let file = csv_file();

    let mut state = AnalysisState::new();
    state.set_file(Some(file.clone()));
    state.set_status(AnalysisStatus::Processing);

    let mut record_highlights = None;
    for event in collect_events(&service, &file).await {
        match event {
            AnalysisStreamEvent::Data { highlights, .. } => record_highlights = Some(highlights),
            AnalysisStreamEvent::Complete => state.set_status(AnalysisStatus::Completed),
            AnalysisStreamEvent::Error { error } => {
                state.set_error(Some(error.to_string()));
                state.set_status(AnalysisStatus::Error);
            }
        }
    }

    assert_eq!(state.status(), AnalysisStatus::Error);
    assert_eq!(state.error(), Some("Unknown parsing error"));

    let item = store
        .add_to_history(NewHistoryItem {
            file_name: file.name.clone(),
            highlights: record_highlights,
        })
        .unwrap();
    assert!(!item.is_successful());
    assert_eq!(store.get_history().len(), 1);
}
