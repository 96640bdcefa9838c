#![cfg(test)]
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use kiva_common::config::Config;
use kiva_common::error::{DecodeError, FetchError};
use kiva_common::loan::LoanRecord;
use kiva_core::fetcher::{HttpLoanSource, LoanSource};
use kiva_core::parser::LoanBatch;
use kiva_core::screen::{CycleOutcome, LoanScreen};

use crate::support::{CannedResponse, CountingDisplay, MockServer, loan_json, newest_body};

fn config_for(url: String) -> Config {
    Config {
        endpoint: url,
        timeout: Duration::from_secs(5),
        ..Default::default()
    }
}

fn two_loans() -> String {
    newest_body(&[
        loan_json("Maria", 1200, "to buy a sewing machine", "Peru"),
        loan_json("Joseph", 300, "to restock his shop", "Kenya"),
    ])
}

fn screen_for(server: &MockServer) -> LoanScreen<CountingDisplay> {
    let source = HttpLoanSource::new(&config_for(server.url())).unwrap();
    LoanScreen::new(Arc::new(source), CountingDisplay::default())
}

#[tokio::test]
async fn http_source_parses_body_in_order() {
    let server = MockServer::start(vec![CannedResponse::ok(two_loans())]).await.unwrap();
    let source = HttpLoanSource::new(&config_for(server.url())).unwrap();

    let batch: LoanBatch = source.fetch_latest_loans().await.unwrap();

    assert_eq!(
        batch.records,
        vec![
            LoanRecord::new("Maria", 1200, "to buy a sewing machine", "Peru"),
            LoanRecord::new("Joseph", 300, "to restock his shop", "Kenya"),
        ]
    );
    assert_eq!(server.hits(), 1);
}

#[tokio::test]
async fn http_source_reports_non_success_status() {
    let server = MockServer::start(vec![CannedResponse::status(503)]).await.unwrap();
    let source = HttpLoanSource::new(&config_for(server.url())).unwrap();

    let result = source.fetch_latest_loans().await;

    assert!(matches!(result, Err(FetchError::Status(503))));
}

#[tokio::test]
async fn http_source_reports_connection_refused() {
    let addr: SocketAddr = {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let source = HttpLoanSource::new(&config_for(format!("http://{addr}/newest.json"))).unwrap();

    let result = source.fetch_latest_loans().await;

    assert!(matches!(result, Err(FetchError::Transport(_))));
}

#[tokio::test]
async fn http_source_times_out_on_silent_server() {
    let server = MockServer::start(Vec::new()).await.unwrap();
    let cfg = Config {
        timeout: Duration::from_millis(200),
        ..config_for(server.url())
    };
    let source = HttpLoanSource::new(&cfg).unwrap();

    let result = source.fetch_latest_loans().await;

    match result {
        Err(FetchError::Transport(e)) => assert!(e.is_timeout(), "unexpected error: {e}"),
        other => panic!("expected a timeout, got {other:?}"),
    }
}

#[tokio::test]
async fn html_error_page_is_a_decode_error_not_a_fetch_error() {
    let server = MockServer::start(vec![CannedResponse::ok("<html>maintenance</html>")])
        .await
        .unwrap();
    let source = HttpLoanSource::new(&config_for(server.url())).unwrap();

    let batch: LoanBatch = source.fetch_latest_loans().await.unwrap();

    assert!(batch.records.is_empty());
    assert!(matches!(batch.decode_error, Some(DecodeError::Json(_))));
}

#[tokio::test]
async fn malformed_element_is_skipped_end_to_end() {
    let broken = r#"{"name":"Ahmed","use":"to buy feed","location":{"country":"Jordan"}}"#;
    let body = newest_body(&[loan_json("Maria", 1200, "to buy yarn", "Peru"), broken.to_string()]);
    let server = MockServer::start(vec![CannedResponse::ok(body)]).await.unwrap();
    let mut screen = screen_for(&server);

    let outcome: CycleOutcome = screen.refresh().await;

    assert!(matches!(outcome, CycleOutcome::Refreshed { count: 1, skipped: 1, .. }));
    assert_eq!(screen.loans().record_at(0).map(|l| l.amount), Some(1200));
}

#[tokio::test]
async fn repeated_cycles_replace_rather_than_append() {
    let server = MockServer::start(vec![CannedResponse::ok(two_loans())]).await.unwrap();
    let mut screen = screen_for(&server);

    screen.refresh().await;
    let first: Vec<LoanRecord> = screen.loans().records().to_vec();
    screen.refresh().await;

    assert_eq!(screen.loans().records(), first.as_slice());
    assert_eq!(screen.loans().record_count(), 2);
    assert_eq!(screen.display().changes, 2);
    assert_eq!(server.hits(), 2);
}

#[tokio::test]
async fn server_error_after_success_keeps_previous_loans() {
    let server = MockServer::start(vec![
        CannedResponse::ok(two_loans()),
        CannedResponse::status(500),
    ])
    .await
    .unwrap();
    let mut screen = screen_for(&server);

    assert!(screen.refresh().await.is_refreshed());
    let outcome: CycleOutcome = screen.refresh().await;

    assert!(matches!(outcome, CycleOutcome::Failed(FetchError::Status(500))));
    assert_eq!(screen.loans().record_count(), 2);
    assert_eq!(screen.display().changes, 1);
    assert_eq!(screen.display().failures, 1);
    assert_eq!(screen.display().last_count, 2);
}
