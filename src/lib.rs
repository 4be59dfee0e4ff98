//! Authenticated REST client for the Upbit exchange.
//!
//! Covers the deposit/withdraw history endpoints plus a derived net-deposit
//! calculation:
//!
//! - [`Upbit::get_deposit_history`] - accepted deposits for a currency
//! - [`Upbit::get_withdraws_history`] - completed withdrawals for a currency
//! - [`Upbit::get_net_deposit_of_krw`] - `sum(deposits) - sum(withdrawals)`
//!   for KRW
//!
//! Requests are authorized with a per-request JWT that binds the query
//! parameters through a SHA-512 `query_hash` and a single-use UUIDv4 nonce
//! (see [`auth`]). List endpoints are paginated transparently (see
//! [`Upbit`]).
//!
//! # Example
//!
//! ```rust,no_run
//! use upbit_rest::{Upbit, UpbitConfig};
//!
//! # async fn example() -> upbit_rest::Result<()> {
//! let client = Upbit::new(
//!     UpbitConfig::builder()
//!         .access_key("your-access-key")
//!         .secret_key("your-secret-key")
//!         .build(),
//! )?;
//!
//! let deposits = client.get_deposit_history("KRW").await?;
//! let net = client.get_net_deposit_of_krw().await?;
//! println!("{} deposits, net {net} KRW", deposits.len());
//! # Ok(())
//! # }
//! ```
//!
//! No retries, caching, or rate limiting: every error propagates straight to
//! the caller (see [`error`]).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod auth;
pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod http;
pub mod logging;
pub mod query;
pub mod types;

pub use client::{Upbit, DEFAULT_CURRENCY};
pub use config::{UpbitConfig, UpbitConfigBuilder, DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE};
pub use credentials::{Credentials, SecretString};
pub use error::{Error, Result};
pub use query::QueryParams;
pub use types::HistoryRecord;
