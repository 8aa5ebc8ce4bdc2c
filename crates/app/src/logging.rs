//! `tracing` subscriber for the desktop binary.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "info,sqlx=warn";
const VERBOSE_FILTER: &str = "debug,sqlx=info";

/// Install the global subscriber.
///
/// `--verbose` wins over `RUST_LOG`; otherwise `RUST_LOG` wins over the default filter.
///
/// # Errors
///
/// Returns `TryInitError` if a global subscriber is already installed.
pub fn init_logging(verbose: bool) -> Result<(), TryInitError> {
    let directives = filter_directives(verbose, std::env::var("RUST_LOG").ok());
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .try_init()
}

fn filter_directives(verbose: bool, env: Option<String>) -> String {
    if verbose {
        return VERBOSE_FILTER.to_string();
    }
    env.filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}
