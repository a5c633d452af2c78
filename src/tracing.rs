//! Tracing setup for shells embedding the container
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=sidedock=trace` - container state transitions only
//! - `RUST_LOG=sidedock::container=debug` - module-level filtering

use std::path::Path;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize console logging
///
/// Respects RUST_LOG for filtering; defaults to `warn` when unset.
pub fn init() {
    init_with_log_dir(None::<&Path>);
}

/// Initialize console logging plus a rolling debug log file
///
/// The file layer writes to `<log_dir>/sidedock.log` with daily rotation
/// and logs at debug level regardless of RUST_LOG, for troubleshooting
/// panel lifecycle issues after the fact.
pub fn init_with_log_dir(log_dir: Option<impl AsRef<Path>>) {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_filter(console_filter);

    let file_layer = log_dir.map(|dir| {
        let file_appender = tracing_appender::rolling::daily(dir.as_ref(), "sidedock.log");
        fmt::layer()
            .with_writer(file_appender)
            .with_ansi(false)
            .with_target(true)
            .with_filter(EnvFilter::new("debug"))
    });

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}
