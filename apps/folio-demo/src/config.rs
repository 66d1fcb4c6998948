//! Demo configuration.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use serde::{Deserialize, Serialize};
use std::env;

use folio_core::DEFAULT_CATALOG_NAME;

/// Demo configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Catalog name used in every narration line
    pub library_name: String,

    /// Dump the recorded event history as JSON after the run
    pub log_history: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            library_name: DEFAULT_CATALOG_NAME.to_string(),
            log_history: false,
        }
    }
}

impl DemoConfig {
    /// Load configuration from environment variables.
    ///
    /// - `FOLIO_LIBRARY_NAME` (default "City Library")
    /// - `FOLIO_LOG_HISTORY` (`true`/`false`, default false)
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = DemoConfig::default();

        let library_name = match lookup("FOLIO_LIBRARY_NAME") {
            Some(name) if name.trim().is_empty() => {
                return Err(ConfigError::InvalidValue("FOLIO_LIBRARY_NAME".to_string()))
            }
            Some(name) => name.trim().to_string(),
            None => defaults.library_name,
        };

        let log_history = match lookup("FOLIO_LOG_HISTORY") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("FOLIO_LOG_HISTORY".to_string()))?,
            None => defaults.log_history,
        };

        Ok(DemoConfig {
            library_name,
            log_history,
        })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = DemoConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.library_name, "City Library");
        assert!(!config.log_history);
    }

    #[test]
    fn test_reads_overrides() {
        let config = DemoConfig::from_lookup(lookup_from(&[
            ("FOLIO_LIBRARY_NAME", "  Branch Library "),
            ("FOLIO_LOG_HISTORY", "true"),
        ]))
        .unwrap();
        assert_eq!(config.library_name, "Branch Library");
        assert!(config.log_history);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = DemoConfig::from_lookup(lookup_from(&[("FOLIO_LOG_HISTORY", "yes")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for FOLIO_LOG_HISTORY");

        assert!(DemoConfig::from_lookup(lookup_from(&[("FOLIO_LIBRARY_NAME", "  ")])).is_err());
    }
}
