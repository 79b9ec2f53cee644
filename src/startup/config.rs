//! Startup configuration types.
//!
//! This module defines where chatdeck keeps its state and how it logs.

use std::path::PathBuf;
use std::time::Duration;

/// Name of the data directory under the home directory.
pub const DATA_DIR_NAME: &str = ".chatdeck";

/// Environment variable overriding the data directory.
pub const HOME_ENV: &str = "CHATDECK_HOME";

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "CHATDECK_LOG";

/// Log file name inside the data directory.
pub const LOG_FILE: &str = "chatdeck.log";

/// Default filter when `CHATDECK_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "chatdeck=info";

/// Configuration for startup.
///
/// Use the builder pattern to customize startup behavior.
///
/// # Example
///
/// ```ignore
/// use chatdeck::startup::StartupConfig;
///
/// let config = StartupConfig::from_env()
///     .with_data_dir("/tmp/chatdeck")
///     .with_log_filter("chatdeck=debug");
/// ```
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// Explicit data directory (CLI flag or `CHATDECK_HOME`)
    pub data_dir: Option<PathBuf>,
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
    /// Interval of the UI tick (hydration retries, redraws)
    pub tick_rate: Duration,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            tick_rate: Duration::from_millis(250),
        }
    }
}

impl StartupConfig {
    /// Create a new StartupConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the data directory.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Override the data directory if `dir` is given.
    pub fn with_data_dir_override(self, dir: Option<PathBuf>) -> Self {
        match dir {
            Some(dir) => self.with_data_dir(dir),
            None => self,
        }
    }

    /// Set the log filter directive.
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Set the UI tick interval.
    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    /// Create config from `CHATDECK_HOME` and `CHATDECK_LOG`.
    ///
    /// Empty values are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            config = config.with_data_dir(home);
        }
        if let Ok(filter) = std::env::var(LOG_ENV) {
            if !filter.trim().is_empty() {
                config = config.with_log_filter(filter);
            }
        }
        config
    }

    /// Resolve the data directory: explicit setting, else `~/.chatdeck`.
    ///
    /// Returns `None` if no home directory can be determined.
    pub fn resolve_data_dir(&self) -> Option<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Some(dir.clone());
        }
        dirs::home_dir().map(|home| home.join(DATA_DIR_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_startup_config_default() {
        let config = StartupConfig::default();
        assert!(config.data_dir.is_none());
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert_eq!(config.tick_rate, Duration::from_millis(250));
    }

    #[test]
    fn test_startup_config_builder() {
        let config = StartupConfig::new()
            .with_data_dir("/tmp/deck")
            .with_log_filter("chatdeck=trace")
            .with_tick_rate(Duration::from_millis(50));

        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/deck")));
        assert_eq!(config.log_filter, "chatdeck=trace");
        assert_eq!(config.tick_rate, Duration::from_millis(50));
    }

    #[test]
    fn test_data_dir_override() {
        let config = StartupConfig::new().with_data_dir("/a");
        let kept = config.clone().with_data_dir_override(None);
        assert_eq!(kept.data_dir, Some(PathBuf::from("/a")));

        let replaced = config.with_data_dir_override(Some(PathBuf::from("/b")));
        assert_eq!(replaced.data_dir, Some(PathBuf::from("/b")));
    }

    #[test]
    fn test_resolve_explicit_data_dir() {
        let config = StartupConfig::new().with_data_dir("/srv/deck");
        assert_eq!(config.resolve_data_dir(), Some(PathBuf::from("/srv/deck")));
    }

    #[test]
    fn test_resolve_default_data_dir() {
        let config = StartupConfig::new();
        if let Some(home) = dirs::home_dir() {
            assert_eq!(config.resolve_data_dir(), Some(home.join(DATA_DIR_NAME)));
        }
    }

    #[test]
    #[serial]
    fn test_from_env_reads_overrides() {
        std::env::set_var(HOME_ENV, "/env/deck");
        std::env::set_var(LOG_ENV, "chatdeck=debug");
        let config = StartupConfig::from_env();
        std::env::remove_var(HOME_ENV);
        std::env::remove_var(LOG_ENV);

        assert_eq!(config.data_dir, Some(PathBuf::from("/env/deck")));
        assert_eq!(config.log_filter, "chatdeck=debug");
    }

    #[test]
    #[serial]
    fn test_from_env_ignores_empty_values() {
        std::env::set_var(HOME_ENV, "");
        std::env::set_var(LOG_ENV, "  ");
        let config = StartupConfig::from_env();
        std::env::remove_var(HOME_ENV);
        std::env::remove_var(LOG_ENV);

        assert!(config.data_dir.is_none());
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }
}
