//! Tracing subscriber setup for the binary.

use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::{Layer, SubscriberExt};
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

use crate::config::{LogFormat, LoggingConfig};

/// Environment variable that overrides the configured filter.
pub const LOG_ENV: &str = "ECOMETER_LOG";

/// Resolves the filter: `ECOMETER_LOG`, then `RUST_LOG`, then `fallback`.
///
/// An unparsable directive is reported on stderr and replaced by `fallback`.
pub fn resolve_filter(fallback: &str) -> EnvFilter {
    let directive = std::env::var(LOG_ENV)
        .or_else(|_| std::env::var(EnvFilter::DEFAULT_ENV))
        .unwrap_or_else(|_| fallback.to_owned());

    EnvFilter::try_new(&directive).unwrap_or_else(|err| {
        eprintln!("invalid log directive \"{directive}\" ({err}); using \"{fallback}\"");
        EnvFilter::new(fallback)
    })
}

/// Installs the global subscriber. Output goes to stderr so stdout stays
/// reserved for view JSON.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TryInitError> {
    let fmt_layer = match config.format {
        LogFormat::Json => fmt::layer()
            .with_target(false)
            .json()
            .with_writer(std::io::stderr)
            .boxed(),
        LogFormat::Pretty => fmt::layer()
            .with_target(true)
            .with_writer(std::io::stderr)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(resolve_filter(&config.filter))
        .with(fmt_layer)
        .try_init()
}
