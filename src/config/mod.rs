//! Configuration management.
//!
//! Configuration comes from a TOML file, then environment overrides:
//!
//! | Variable | Overrides |
//! |----------|-----------|
//! | `STONECAT_CATALOG` | `catalog_path` |
//! | `STONECAT_TAG_MATCH` | `tag_match` (`any` or `all`) |
//! | `STONECAT_MAX_RESULTS` | `max_results` |
//! | `STONECAT_LOG_FORMAT` | `logging.format` |

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::models::TagMatch;
use crate::{Error, Result};

/// Main configuration for stonecat.
#[derive(Debug, Clone)]
pub struct StonecatConfig {
    /// Catalog file to load; `None` uses the built-in seed catalog.
    pub catalog_path: Option<PathBuf>,
    /// Default combination mode for multi-tag queries.
    pub tag_match: TagMatch,
    /// Maximum number of results shown by the CLI.
    pub max_results: usize,
    /// Skip invalid catalog records instead of failing the load.
    pub lenient: bool,
    /// Logging settings.
    pub logging: LoggingSettings,
}

/// Logging section of the configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LoggingSettings {
    /// Filter directive, e.g. `info` or `stonecat=debug`.
    pub level: Option<String>,
    /// Output format: `pretty` or `json`.
    pub format: Option<String>,
    /// Log file path; stderr when unset.
    pub file: Option<PathBuf>,
}

/// Configuration file structure (for TOML parsing).
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Catalog file path.
    pub catalog_path: Option<String>,
    /// Tag match mode.
    pub tag_match: Option<String>,
    /// Max results.
    pub max_results: Option<usize>,
    /// Lenient ingestion.
    pub lenient: Option<bool>,
    /// Logging section.
    pub logging: Option<LoggingSettings>,
}

impl Default for StonecatConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            tag_match: TagMatch::Any,
            max_results: 20,
            lenient: false,
            logging: LoggingSettings::default(),
        }
    }
}

impl StonecatConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::OperationFailed {
            operation: "read_config_file".to_string(),
            cause: format!("{}: {e}", path.display()),
        })?;
        Self::from_toml(&contents)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid config file.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(contents).map_err(|e| Error::OperationFailed {
            operation: "parse_config_file".to_string(),
            cause: e.to_string(),
        })?;
        Ok(Self::from_config_file(file))
    }

    /// Loads configuration from the default location.
    ///
    /// Checks the following paths in order:
    /// 1. Platform-specific config dir (`~/Library/Application Support/stonecat/` on macOS)
    /// 2. XDG config dir (`~/.config/stonecat/`)
    ///
    /// Returns default configuration if no readable config file is found.
    #[must_use]
    pub fn load_default() -> Self {
        let Some(base_dirs) = directories::BaseDirs::new() else {
            return Self::default();
        };

        let candidates = [
            base_dirs.config_dir().join("stonecat").join("config.toml"),
            base_dirs
                .home_dir()
                .join(".config")
                .join("stonecat")
                .join("config.toml"),
        ];

        for candidate in candidates {
            if !candidate.exists() {
                continue;
            }
            match Self::load_from_file(&candidate) {
                Ok(config) => return config,
                Err(e) => warn!(path = %candidate.display(), error = %e, "Ignoring unreadable config file"),
            }
        }

        Self::default()
    }

    /// Converts a `ConfigFile` to `StonecatConfig`.
    fn from_config_file(file: ConfigFile) -> Self {
        let mut config = Self::default();

        if let Some(path) = file.catalog_path {
            config.catalog_path = Some(PathBuf::from(path));
        }
        if let Some(mode) = file.tag_match {
            config.tag_match = TagMatch::parse(&mode);
        }
        if let Some(max_results) = file.max_results {
            config.max_results = max_results;
        }
        if let Some(lenient) = file.lenient {
            config.lenient = lenient;
        }
        if let Some(logging) = file.logging {
            config.logging = logging;
        }

        config
    }

    /// Applies `STONECAT_*` environment overrides.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Applies overrides from an arbitrary variable lookup.
    #[must_use]
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(path) = get("STONECAT_CATALOG") {
            self.catalog_path = Some(PathBuf::from(path));
        }
        if let Some(mode) = get("STONECAT_TAG_MATCH") {
            self.tag_match = TagMatch::parse(&mode);
        }
        if let Some(max) = get("STONECAT_MAX_RESULTS") {
            match max.trim().parse() {
                Ok(max) => self.max_results = max,
                Err(e) => warn!(value = %max, error = %e, "Ignoring invalid STONECAT_MAX_RESULTS"),
            }
        }
        if let Some(format) = get("STONECAT_LOG_FORMAT") {
            self.logging.format = Some(format);
        }
        self
    }

    /// Sets the catalog path.
    #[must_use]
    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = Some(path.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = StonecatConfig::new();
        assert!(config.catalog_path.is_none());
        assert_eq!(config.tag_match, TagMatch::Any);
        assert_eq!(config.max_results, 20);
        assert!(!config.lenient);
    }

    #[test]
    fn test_from_toml() {
        let config = StonecatConfig::from_toml(
            r#"
            catalog_path = "/data/catalog.yaml"
            tag_match = "all"
            max_results = 5
            lenient = true

            [logging]
            level = "stonecat=debug"
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.catalog_path, Some(PathBuf::from("/data/catalog.yaml")));
        assert_eq!(config.tag_match, TagMatch::All);
        assert_eq!(config.max_results, 5);
        assert!(config.lenient);
        assert_eq!(config.logging.level.as_deref(), Some("stonecat=debug"));
        assert_eq!(config.logging.format.as_deref(), Some("json"));
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_from_toml_rejects_unknown_keys() {
        let err = StonecatConfig::from_toml("catalogue = \"x\"").unwrap_err();
        assert!(matches!(err, Error::OperationFailed { ref operation, .. } if operation == "parse_config_file"));

        let err = StonecatConfig::from_toml("[logging]\nlevle = \"debug\"\n").unwrap_err();
        assert!(err.to_string().contains("levle"));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("STONECAT_CATALOG", "/tmp/c.json"),
            ("STONECAT_TAG_MATCH", "all"),
            ("STONECAT_MAX_RESULTS", "not-a-number"),
            ("STONECAT_LOG_FORMAT", "  "),
        ]
        .into_iter()
        .collect();

        let config = StonecatConfig::new()
            .with_overrides_from(|key| vars.get(key).map(|v| (*v).to_string()));

        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/c.json")));
        assert_eq!(config.tag_match, TagMatch::All);
        assert_eq!(config.max_results, 20);
        assert!(config.logging.format.is_none());
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = StonecatConfig::load_from_file(Path::new("/nonexistent/stonecat.toml"))
            .unwrap_err();
        assert!(matches!(err, Error::OperationFailed { .. }));
    }
}
