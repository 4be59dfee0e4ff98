//! The Upbit client: paginated history retrieval and net-deposit math.

use crate::auth::UpbitAuth;
use crate::config::UpbitConfig;
use crate::credentials::Credentials;
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::query::QueryParams;
use crate::types::{amounts, HistoryRecord};
use tracing::debug;

/// Currency used by the net-deposit operation.
pub const DEFAULT_CURRENCY: &str = "KRW";

const DEPOSITS_PATH: &str = "/v1/deposits";
const WITHDRAWS_PATH: &str = "/v1/withdraws";

/// Authenticated Upbit REST client.
///
/// Holds an immutable credential pair; every call signs its own request and
/// carries no state between calls.
///
/// # Example
///
/// ```rust,no_run
/// use upbit_rest::{Upbit, UpbitConfig};
///
/// # async fn example() -> upbit_rest::Result<()> {
/// let client = Upbit::new(
///     UpbitConfig::builder()
///         .access_key("your-access-key")
///         .secret_key("your-secret-key")
///         .build(),
/// )?;
///
/// let net = client.get_net_deposit_of_krw().await?;
/// println!("net KRW deposit: {net}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Upbit {
    config: UpbitConfig,
    auth: UpbitAuth,
    http: HttpClient,
}

impl Upbit {
    /// Creates a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Authentication`] if either key is missing or empty,
    /// or [`Error::Network`] if the HTTP client cannot be built.
    pub fn new(config: UpbitConfig) -> Result<Self> {
        let access_key = config
            .access_key
            .clone()
            .ok_or_else(|| Error::authentication("access key is required"))?;
        let secret_key = config
            .secret_key
            .clone()
            .ok_or_else(|| Error::authentication("secret key is required"))?;
        let credentials = Credentials::new(access_key, secret_key)?;

        let http = HttpClient::new(&config)?;

        Ok(Self {
            config,
            auth: UpbitAuth::new(credentials),
            http,
        })
    }

    /// Creates a client with credentials from `UPBIT_ACCESS_KEY` /
    /// `UPBIT_SECRET_KEY` and an otherwise default configuration.
    pub fn from_env() -> Result<Self> {
        let credentials = Credentials::from_env()?;
        Self::new(
            UpbitConfig::builder()
                .access_key(credentials.access_key().clone())
                .secret_key(credentials.secret_key().clone())
                .build(),
        )
    }

    /// Fetches all accepted deposits for `currency` and returns their
    /// amounts, in server order.
    pub async fn get_deposit_history(&self, currency: &str) -> Result<Vec<f64>> {
        if currency.is_empty() {
            return Err(Error::invalid_argument("currency must not be empty"));
        }
        let mut params = QueryParams::new();
        params.push("currency", currency);
        params.push("state", "accepted");
        let records = self.fetch_all_pages(DEPOSITS_PATH, &params).await?;
        amounts(&records)
    }

    /// Fetches all completed withdrawals for `currency` and returns their
    /// amounts, in server order.
    pub async fn get_withdraws_history(&self, currency: &str) -> Result<Vec<f64>> {
        if currency.is_empty() {
            return Err(Error::invalid_argument("currency must not be empty"));
        }
        let mut params = QueryParams::new();
        params.push("currency", currency);
        params.push("state", "done");
        let records = self.fetch_all_pages(WITHDRAWS_PATH, &params).await?;
        amounts(&records)
    }

    /// Returns the cumulative net KRW deposit:
    /// `sum(deposits) - sum(withdrawals)`.
    pub async fn get_net_deposit_of_krw(&self) -> Result<f64> {
        let deposits: f64 = self.get_deposit_history(DEFAULT_CURRENCY).await?.iter().sum();
        let withdraws: f64 = self
            .get_withdraws_history(DEFAULT_CURRENCY)
            .await?
            .iter()
            .sum();
        Ok(deposits - withdraws)
    }

    /// Collects every page of a list endpoint.
    ///
    /// Pages are requested strictly in sequence starting at 1; a page that is
    /// empty or shorter than the configured page size is taken as the last
    /// one. When the total is an exact multiple of the page size this costs
    /// one trailing request that returns an empty array.
    ///
    /// A failure on any page aborts the whole fetch; accumulated pages are
    /// discarded.
    async fn fetch_all_pages(
        &self,
        path: &str,
        base_params: &QueryParams,
    ) -> Result<Vec<HistoryRecord>> {
        let mut records = Vec::new();
        let mut page: u32 = 1;

        loop {
            let mut params = base_params.clone();
            params.push("page", page.to_string());
            debug!(path, page, "fetching page");

            // Fresh token per request, bound to this page's parameters.
            let headers = self.auth.bearer_header(&params)?;
            let url = format!("{}{}?{}", self.config.base_url, path, params.encode());

            let body = self.http.get(&url, Some(headers)).await?;
            let page_records: Vec<HistoryRecord> = serde_json::from_value(body)
                .map_err(|e| Error::parse(format!("unexpected response shape: {e}")))?;

            let count = page_records.len();
            records.extend(page_records);
            debug!(path, page, count, total = records.len(), "page accumulated");

            if count == 0 || count < self.config.page_size {
                break;
            }
            page += 1;
        }

        Ok(records)
    }
}
