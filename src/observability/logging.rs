//! Logging setup and HTTP request tracing.
//!
//! Logs go through `tracing`. `RUST_LOG` controls the filter (default
//! `info`); the output format comes from configuration.

use axum::http::Request;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnResponse, MakeSpan, TraceLayer};
use tracing::{Level, Span};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

use crate::config::LogFormat;

use super::{ObservabilityError, ObservabilityResult};

const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber
pub fn init_logging(format: LogFormat) -> ObservabilityResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let result = match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init(),
    };

    result.map_err(|e| ObservabilityError::new(format!("failed to install subscriber: {}", e)))
}

/// One span per request, tagged with a fresh request id
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSpan;

impl<B> MakeSpan<B> for RequestSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        tracing::info_span!(
            "http_request",
            request_id = %Uuid::new_v4(),
            method = %request.method(),
            path = %request.uri().path(),
        )
    }
}

/// Trace layer used by the HTTP server
pub type HttpTraceLayer = TraceLayer<SharedClassifier<ServerErrorsAsFailures>, RequestSpan>;

/// Request tracing with completed responses logged at INFO
pub fn http_trace_layer() -> HttpTraceLayer {
    TraceLayer::new_for_http()
        .make_span_with(RequestSpan)
        .on_response(DefaultOnResponse::new().level(Level::INFO))
}
