//! Tracing subscriber setup for the `schedsim` binary.
//!
//! The library only emits `tracing` events; installing a subscriber is up
//! to the application.

use tracing::debug;
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError,
    EnvFilter,
};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// Environment variable that switches log output to JSON.
pub const JSON_ENV: &str = "SCHEDSIM_TRACE_JSON";

/// Installs the global tracing subscriber, writing to stderr.
///
/// Environment variables:
/// - `RUST_LOG`: log filter (default: `warn`)
/// - `SCHEDSIM_TRACE_JSON`: JSON output when `1` or `true`
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing() -> Result<(), TryInitError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let registry = tracing_subscriber::registry().with(env_filter);

    if json_requested(std::env::var(JSON_ENV).ok().as_deref()) {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .try_init()?;
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .compact(),
            )
            .try_init()?;
    }

    debug!("tracing initialized");
    Ok(())
}

fn json_requested(value: Option<&str>) -> bool {
    matches!(value, Some(v) if v == "1" || v.eq_ignore_ascii_case("true"))
}
