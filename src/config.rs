//! Client configuration.

use crate::credentials::SecretString;
use std::time::Duration;

/// Production REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.upbit.com";

/// Assumed page size for list endpoints.
///
/// A page shorter than this terminates pagination. Upbit does not document
/// the page size for the history endpoints, so treat this as a heuristic and
/// override it via [`UpbitConfigBuilder::page_size`] if the service's actual
/// page size differs.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Upbit client configuration.
#[derive(Debug, Clone)]
pub struct UpbitConfig {
    /// API access key.
    pub access_key: Option<SecretString>,
    /// API secret key.
    pub secret_key: Option<SecretString>,
    /// Base URL of the REST API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// TCP connection timeout.
    pub connect_timeout: Duration,
    /// Records-per-page heuristic used to detect the last page.
    pub page_size: usize,
    /// Whether to log response bodies at debug level.
    pub verbose: bool,
    /// User-Agent header value.
    pub user_agent: String,
}

impl Default for UpbitConfig {
    fn default() -> Self {
        Self {
            access_key: None,
            secret_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            page_size: DEFAULT_PAGE_SIZE,
            verbose: false,
            user_agent: format!("upbit-rest/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl UpbitConfig {
    /// Creates a configuration builder.
    ///
    /// # Example
    ///
    /// ```rust
    /// use upbit_rest::UpbitConfig;
    ///
    /// let config = UpbitConfig::builder()
    ///     .access_key("your-access-key")
    ///     .secret_key("your-secret-key")
    ///     .build();
    /// ```
    pub fn builder() -> UpbitConfigBuilder {
        UpbitConfigBuilder::default()
    }
}

/// Builder for [`UpbitConfig`].
#[derive(Debug, Clone, Default)]
pub struct UpbitConfigBuilder {
    config: UpbitConfig,
}

impl UpbitConfigBuilder {
    /// Creates a builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API access key.
    pub fn access_key(mut self, key: impl Into<SecretString>) -> Self {
        self.config.access_key = Some(key.into());
        self
    }

    /// Sets the API secret key.
    pub fn secret_key(mut self, key: impl Into<SecretString>) -> Self {
        self.config.secret_key = Some(key.into());
        self
    }

    /// Overrides the base URL (e.g. for a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Sets the TCP connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Overrides the last-page detection heuristic.
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.config.page_size = page_size;
        self
    }

    /// Enables response-body logging at debug level.
    pub fn verbose(mut self, enabled: bool) -> Self {
        self.config.verbose = enabled;
        self
    }

    /// Sets a custom User-Agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> UpbitConfig {
        self.config
    }
}
