//! Structured logging configuration.

use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingSettings;

/// Environment variable holding a filter directive.
pub const LOG_ENV_VAR: &str = "STONECAT_LOG";

const DEFAULT_LEVEL: &str = "warn";
const VERBOSE_LEVEL: &str = "debug";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable multi-line output.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// Parses a format name. Unrecognized values fall back to `Pretty`.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Pretty,
        }
    }
}

/// Logging configuration.
#[derive(Debug)]
pub struct LoggingConfig {
    /// Output format.
    pub format: LogFormat,
    /// Event filter.
    pub filter: EnvFilter,
    /// Log file; stderr when unset.
    pub file: Option<PathBuf>,
}

impl LoggingConfig {
    /// Builds logging configuration from settings and the environment.
    ///
    /// The filter directive is taken from `STONECAT_LOG`, then the
    /// `logging.level` setting, then `debug` when verbose, else `warn`.
    #[must_use]
    pub fn from_settings(settings: Option<&LoggingSettings>, verbose: bool) -> Self {
        let env_directive = std::env::var(LOG_ENV_VAR).ok();
        Self::resolve(settings, verbose, env_directive.as_deref())
    }

    fn resolve(settings: Option<&LoggingSettings>, verbose: bool, env_directive: Option<&str>) -> Self {
        let directive = resolve_directive(
            env_directive,
            settings.and_then(|s| s.level.as_deref()),
            verbose,
        );
        let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

        Self {
            format: settings
                .and_then(|s| s.format.as_deref())
                .map(LogFormat::parse)
                .unwrap_or_default(),
            filter,
            file: settings.and_then(|s| s.file.clone()),
        }
    }
}

/// Picks the filter directive by precedence.
fn resolve_directive<'a>(
    env_directive: Option<&'a str>,
    configured: Option<&'a str>,
    verbose: bool,
) -> &'a str {
    env_directive
        .filter(|d| !d.trim().is_empty())
        .or_else(|| configured.filter(|d| !d.trim().is_empty()))
        .unwrap_or(if verbose { VERBOSE_LEVEL } else { DEFAULT_LEVEL })
}
