//! Thin HTTP layer over `reqwest`.
//!
//! One GET per call, no retries, no rate limiting: transport failures and
//! non-success statuses surface directly to the caller as structured errors.
//! Requests and responses are logged with `tracing` at debug level; response
//! bodies are only logged when the client is configured verbose.

use crate::config::UpbitConfig;
use crate::error::{Error, Result};
use reqwest::header::HeaderMap;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

/// HTTP client with a fixed per-request timeout.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    verbose: bool,
}

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Network`] if the underlying client cannot be built.
    pub fn new(config: &UpbitConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| Error::network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            verbose: config.verbose,
        })
    }

    /// Issues a GET request and parses the response body as JSON.
    ///
    /// # Errors
    ///
    /// - [`Error::Network`] on transport failure or timeout
    /// - [`Error::HttpStatus`] on any non-2xx response, carrying the status
    ///   and (truncated) body
    /// - [`Error::Parse`] if the body is not valid JSON
    pub async fn get(&self, url: &str, headers: Option<HeaderMap>) -> Result<Value> {
        debug!(url, "GET");

        let mut request = self.client.get(url);
        if let Some(headers) = headers {
            request = request.headers(headers);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!(status = status.as_u16(), url, "response received");

        let body = response.text().await?;
        if self.verbose {
            debug!(body = %body, "response body");
        }

        if !status.is_success() {
            return Err(Error::http_status(status.as_u16(), body));
        }

        serde_json::from_str(&body)
            .map_err(|e| Error::parse(format!("invalid JSON response: {e}")))
    }
}
