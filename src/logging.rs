//! Structured logging setup.
//!
//! The client emits `tracing` events at its observation points (pre-request,
//! post-response, pagination progress). Applications that already install a
//! subscriber can ignore this module; [`init`] is a convenience for binaries
//! and examples.

use tracing_subscriber::EnvFilter;

/// Installs a formatted `tracing` subscriber.
///
/// The filter comes from `RUST_LOG` when set, otherwise `default_filter`
/// (e.g. `"upbit_rest=debug"`). Safe to call more than once; later calls are
/// no-ops.
pub fn init(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
