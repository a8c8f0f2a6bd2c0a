use std::time::{Duration, Instant};

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::debug;

use super::error::{RequestError, TransportError};
use super::request::HttpRequest;
use super::response::HttpResponse;

/// Executes one request at a time. Holds no connection state between calls.
#[derive(Debug, Clone)]
pub struct HttpClient {
    default_timeout_secs: u64,
}

impl HttpClient {
    pub fn new(default_timeout_secs: u64) -> Self {
        Self {
            default_timeout_secs,
        }
    }

    /// Builds a request that uses this client's default timeout. The method
    /// name is matched case-insensitively.
    pub fn build(
        &self,
        method: &str,
        url: &str,
        headers: Vec<(String, String)>,
        body: Option<String>,
    ) -> Result<HttpRequest, RequestError> {
        HttpRequest::new(method, url, headers, body, self.default_timeout_secs)
    }

    /// Sends `request` and reads the full body. The elapsed time covers both.
    pub async fn execute<'r>(
        &self,
        request: &'r HttpRequest,
    ) -> Result<HttpResponse<'r>, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(request.timeout_secs()))
            .build()
            .map_err(|e| TransportError::Protocol(format!("Failed to build HTTP client: {e}")))?;

        let mut req_builder = client
            .request(request.method().into(), request.url())
            .headers(build_headers(request.headers())?);
        if let Some(body) = request.body() {
            req_builder = req_builder.body(body.to_string());
        }

        debug!(method = %request.method(), url = request.url(), "sending request");

        let started = Instant::now();
        let response = req_builder
            .send()
            .await
            .map_err(|e| transport_error(e, request.url(), started))?;

        let status = response.status().as_u16();
        let headers = collect_headers(response.headers());
        let bytes = response
            .bytes()
            .await
            .map_err(|e| transport_error(e, request.url(), started))?;
        let elapsed = started.elapsed();
        let body = String::from_utf8_lossy(&bytes).into_owned();

        debug!(status, elapsed_ms = elapsed.as_millis() as u64, size = bytes.len(), "response received");

        Ok(HttpResponse::new(status, headers, body, elapsed, request))
    }
}

fn build_headers(input: &[(String, String)]) -> Result<HeaderMap, TransportError> {
    let mut headers = HeaderMap::new();

    for (key, value) in input {
        let header_name = HeaderName::from_bytes(key.as_bytes())
            .map_err(|e| TransportError::Protocol(format!("Invalid header name `{key}`: {e}")))?;
        let header_value = HeaderValue::from_str(value)
            .map_err(|e| TransportError::Protocol(format!("Invalid header value for `{key}`: {e}")))?;
        headers.append(header_name, header_value);
    }

    Ok(headers)
}

/// Flattens the response headers, folding repeated names into one entry.
fn collect_headers(headers: &HeaderMap) -> Vec<(String, String)> {
    let mut collected: Vec<(String, String)> = Vec::new();

    for (name, value) in headers {
        let value = value.to_str().unwrap_or("<binary>");
        match collected.iter_mut().find(|(key, _)| key == name.as_str()) {
            Some((_, existing)) => {
                existing.push_str(", ");
                existing.push_str(value);
            }
            None => collected.push((name.to_string(), value.to_string())),
        }
    }

    collected
}

fn transport_error(err: reqwest::Error, url: &str, started: Instant) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout {
            elapsed: started.elapsed(),
        }
    } else if err.is_connect() {
        TransportError::Connect {
            url: url.to_string(),
        }
    } else {
        TransportError::Protocol(format!("Request failed: {err}"))
    }
}
