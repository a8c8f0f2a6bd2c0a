use std::time::Duration;

use chrono::{DateTime, Local};

use super::request::HttpRequest;

/// A completed response. Borrows the request that produced it.
#[derive(Debug, Clone)]
pub struct HttpResponse<'r> {
    status_code: u16,
    headers: Vec<(String, String)>,
    body: String,
    elapsed: Duration,
    request: &'r HttpRequest,
    timestamp: DateTime<Local>,
}

impl<'r> HttpResponse<'r> {
    /// Captures a response stamped with the current local time.
    pub fn new(
        status_code: u16,
        headers: Vec<(String, String)>,
        body: String,
        elapsed: Duration,
        request: &'r HttpRequest,
    ) -> Self {
        Self {
            status_code,
            headers,
            body,
            elapsed,
            request,
            timestamp: Local::now(),
        }
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn request(&self) -> &'r HttpRequest {
        self.request
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code)
    }

    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status_code)
    }

    /// First header whose name matches case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn content_type(&self) -> &str {
        self.header("content-type").unwrap_or("")
    }

    /// Size of the body as it travels on the wire (UTF-8 bytes).
    pub fn size_bytes(&self) -> usize {
        self.body.len()
    }

    pub fn elapsed_ms(&self) -> u128 {
        (self.elapsed.as_secs_f64() * 1000.0).round() as u128
    }
}
