//! # Request History
//!
//! A summary of a completed request. Nothing here is persisted; the CLI logs
//! one entry per request at debug level.

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::http::method::HttpMethod;
use crate::http::response::HttpResponse;

/// A completed request and the outcome it produced.
#[derive(Debug, Clone, Serialize)]
pub struct RequestHistory {
    pub method: HttpMethod,
    pub url: String,
    pub status_code: u16,
    pub elapsed_ms: u128,
    pub created_at: DateTime<Local>,
}

impl RequestHistory {
    pub fn from_response(response: &HttpResponse<'_>) -> Self {
        let request = response.request();
        Self {
            method: request.method(),
            url: request.url().to_string(),
            status_code: response.status_code(),
            elapsed_ms: response.elapsed_ms(),
            created_at: response.timestamp(),
        }
    }
}
