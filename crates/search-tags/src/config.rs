//! Configuration parsed from environment variables.
//!
//! Settings can be overridden via environment variables prefixed with
//! `SEARCH_TAGS_`; command line flags take precedence over both.

use std::env;
use std::str::FromStr;

use crate::error::CliError;

/// Environment variable selecting the log level.
pub const LOG_LEVEL_ENV: &str = "SEARCH_TAGS_LOG_LEVEL";

/// Log level enumeration matching tracing crate levels.
///
/// Defaults to `Warn` so that normal runs only print the pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Most verbose logging.
    Trace,
    /// Debug-level information, including skipped files.
    Debug,
    /// Standard informational messages.
    Info,
    /// Warning messages for potentially problematic situations.
    #[default]
    Warn,
    /// Error messages for failures.
    Error,
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(CliError::InvalidConfig(format!(
                "unknown log level '{s}', expected one of: trace, debug, info, warn, error"
            ))),
        }
    }
}

impl LogLevel {
    /// Convert to a tracing filter directive string.
    #[must_use]
    pub fn as_filter_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Runtime configuration for the binary.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: LogLevel,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` if `SEARCH_TAGS_LOG_LEVEL` holds an
    /// unknown level.
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` for unparseable values.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CliError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = match lookup(LOG_LEVEL_ENV) {
            Some(val) => val.parse()?,
            None => LogLevel::default(),
        };
        Ok(Self { log_level })
    }

    /// Apply an optional command line override.
    #[must_use]
    pub fn apply_overrides(mut self, log_level: Option<LogLevel>) -> Self {
        if let Some(level) = log_level {
            self.log_level = level;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("trace", LogLevel::Trace)]
    #[case("Debug", LogLevel::Debug)]
    #[case("INFO", LogLevel::Info)]
    #[case("warning", LogLevel::Warn)]
    #[case(" error ", LogLevel::Error)]
    fn log_level_parses_case_insensitively(#[case] input: &str, #[case] expected: LogLevel) {
        assert_eq!(input.parse::<LogLevel>().ok(), Some(expected));
    }

    #[test]
    fn log_level_rejects_invalid_values() {
        let Err(err) = "loud".parse::<LogLevel>() else {
            panic!("unknown level should be rejected");
        };
        assert!(err.to_string().contains("unknown log level 'loud'"));
    }

    #[test]
    fn defaults_to_warn_without_environment() {
        let config = Config::from_lookup(|_| None)
            .unwrap_or_else(|err| panic!("empty environment should load: {err}"));
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn reads_level_from_lookup() {
        let config = Config::from_lookup(|key| (key == LOG_LEVEL_ENV).then(|| "debug".into()))
            .unwrap_or_else(|err| panic!("valid level should load: {err}"));
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn cli_override_wins_over_environment() {
        let config = Config::default().apply_overrides(Some(LogLevel::Trace));
        assert_eq!(config.log_level, LogLevel::Trace);
        let config = Config::default().apply_overrides(None);
        assert_eq!(config.log_level, LogLevel::Warn);
    }
}
