use super::error::RequestError;
use super::method::HttpMethod;

/// Timeout applied when the caller does not pick one.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// A fully validated request, immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    method: HttpMethod,
    url: String,
    headers: Vec<(String, String)>,
    body: Option<String>,
    timeout_secs: u64,
}

impl HttpRequest {
    /// Builds a request from a method name in any case.
    pub fn new(
        method: &str,
        url: impl Into<String>,
        headers: Vec<(String, String)>,
        body: Option<String>,
        timeout_secs: u64,
    ) -> Result<Self, RequestError> {
        Self::with_method(method.parse()?, url, headers, body, timeout_secs)
    }

    pub fn with_method(
        method: HttpMethod,
        url: impl Into<String>,
        headers: Vec<(String, String)>,
        body: Option<String>,
        timeout_secs: u64,
    ) -> Result<Self, RequestError> {
        if timeout_secs == 0 {
            return Err(RequestError::InvalidTimeout);
        }

        Ok(Self {
            method,
            url: url.into(),
            headers,
            body,
            timeout_secs,
        })
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Headers in the order they were supplied, names untouched.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }
}
