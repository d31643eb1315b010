//! Observability for the service
//!
//! - Structured logging through `tracing` (text or JSON)
//! - One tracing span per HTTP request with a request id
//!
//! # Usage
//!
//! ```ignore
//! use company_registry::config::LogFormat;
//! use company_registry::observability;
//!
//! observability::init_logging(LogFormat::Json)?;
//! let router = router.layer(observability::http_trace_layer());
//! ```

mod logging;

pub use logging::{http_trace_layer, init_logging, HttpTraceLayer, RequestSpan};

use std::fmt;

/// Observability error
///
/// Raised only while installing the subscriber; never fatal on its own.
#[derive(Debug)]
pub struct ObservabilityError {
    message: String,
}

impl ObservabilityError {
    /// Create a new observability error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Get the message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ObservabilityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "observability: {}", self.message)
    }
}

impl std::error::Error for ObservabilityError {}

/// Result type for observability operations
pub type ObservabilityResult<T> = Result<T, ObservabilityError>;
