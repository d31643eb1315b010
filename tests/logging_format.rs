//! Logging Format Tests
//!
//! Captures the JSON subscriber output while driving the router:
//! - Request events carry the `http_request` span with its request id
//! - Storage faults are logged at ERROR with the driver detail
//! - Conflicts keep their constraint detail in the DEBUG log line

use std::io;
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::Request;
use serde_json::Value;
use tower::ServiceExt;
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

use company_registry::companies::{CompanyService, InMemoryCompanyStore};
use company_registry::http_server::{build_router, HttpServerConfig};

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

struct BufferWriter(Arc<Mutex<Vec<u8>>>);

impl<'a> MakeWriter<'a> for SharedBuffer {
    type Writer = BufferWriter;

    fn make_writer(&'a self) -> Self::Writer {
        BufferWriter(Arc::clone(&self.0))
    }
}

impl io::Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .0
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "lock poisoned"))?;
        guard.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn captured_lines(sink: &SharedBuffer) -> Vec<Value> {
    let bytes = sink.0.lock().expect("lock output").clone();
    let text = String::from_utf8(bytes).expect("utf8 log output");
    text.lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).expect("log line is json"))
        .collect()
}

#[tokio::test]
async fn request_logs_carry_request_span() {
    let sink = SharedBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(sink.clone())
        .json()
        .with_max_level(Level::INFO)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let service = Arc::new(CompanyService::new(InMemoryCompanyStore::new()));
    let router = build_router(&HttpServerConfig::default(), service);
    let response = router
        .oneshot(
            Request::builder()
                .uri("/companies/missing")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), 404);

    let lines = captured_lines(&sink);
    let line = lines
        .iter()
        .find(|l| l["span"]["name"] == "http_request")
        .expect("request log line");

    assert_eq!(line["level"], "INFO");
    assert_eq!(line["span"]["method"], "GET");
    assert_eq!(line["span"]["path"], "/companies/missing");
    assert!(line["span"]["request_id"].as_str().is_some());
}

#[test]
fn storage_faults_log_at_error() {
    use axum::response::IntoResponse;
    use company_registry::companies::CompanyError;

    let sink = SharedBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(sink.clone())
        .json()
        .with_max_level(Level::DEBUG)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let _ = CompanyError::Storage("connection reset".to_string()).into_response();
    });

    let lines = captured_lines(&sink);
    let line = lines.first().expect("log line");
    assert_eq!(line["level"], "ERROR");
    assert!(line["fields"]["error"]
        .as_str()
        .unwrap_or_default()
        .contains("connection reset"));
}

#[test]
fn conflict_detail_logged_at_debug() {
    use axum::response::IntoResponse;
    use company_registry::companies::CompanyError;

    let sink = SharedBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(sink.clone())
        .json()
        .with_max_level(Level::DEBUG)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let err = CompanyError::Conflict(
            "duplicate key value violates unique constraint \"companies_pkey\"".to_string(),
        );
        let _ = err.into_response();
    });

    let lines = captured_lines(&sink);
    let line = lines.first().expect("log line");
    assert_eq!(line["level"], "DEBUG");
    assert_eq!(line["fields"]["status"], 409);
    assert!(line["fields"]["error"]
        .as_str()
        .unwrap_or_default()
        .contains("companies_pkey"));
}
