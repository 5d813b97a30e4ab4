//! Structured logging with environment variable configuration.
//!
//! Logs go to stderr so that stdout carries only patterns and search hits.

use tracing_subscriber::EnvFilter;

use crate::config::Config;

fn filter_from_config(config: &Config) -> EnvFilter {
    EnvFilter::new(config.log_level.as_filter_str())
}

/// Initialise the logging subsystem based on configuration.
///
/// Log level precedence (highest to lowest):
///
/// 1. CLI `--log-level`
/// 2. `SEARCH_TAGS_LOG_LEVEL`
/// 3. Default (`warn`)
///
/// A subscriber that is already installed is left in place.
pub fn init_logging(config: &Config) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter_from_config(config))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .finish();

    // First subscriber wins.
    let _ = tracing::subscriber::set_global_default(subscriber);
}
