//! Tracing setup for the `coven` binary.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::schema::default_log_filter;

const VERBOSE_LOG_FILTER: &str = "coven=debug";

/// Logging options resolved from config and CLI flags.
pub struct LogSettings<'a> {
    /// Filter directive from `coven.toml`
    pub filter: &'a str,
    pub verbose: bool,
}

/// Pick the filter: `RUST_LOG` first, then `--verbose`, then the config value.
pub fn resolve_filter(settings: &LogSettings<'_>) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let directive = if settings.verbose { VERBOSE_LOG_FILTER } else { settings.filter };
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(default_log_filter()))
}

/// Install a stderr subscriber. Calling this twice is harmless; the second
/// call leaves the first subscriber in place.
pub fn init_logging(settings: LogSettings<'_>) {
    let filter = resolve_filter(&settings);
    let result = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(filter),
        )
        .try_init();

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
