//! Errors raised while building or executing a request.

use std::time::Duration;

use thiserror::Error;

/// A request model could not be constructed.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("invalid HTTP method: {0}")]
    InvalidMethod(String),

    #[error("timeout must be a positive number of seconds")]
    InvalidTimeout,
}

/// The transport failed before a complete response was received.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request timed out after {:.2}s", elapsed.as_secs_f64())]
    Timeout { elapsed: Duration },

    #[error("could not connect to {url}")]
    Connect { url: String },

    #[error("{0}")]
    Protocol(String),
}
