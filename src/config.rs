//! Configuration loading and constants.
//!
//! Loads application configuration from a TOML file and defines constants for
//! HTTP cache headers, the shutdown grace period, logging defaults, and default
//! paths. `AppConfig` is the root configuration struct containing all settings.

use const_format::formatcp;
use serde::Deserialize;
use std::path::Path;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================
// These constants control Cache-Control headers for upstream caches and load
// balancers. The welcome and info payloads are constant for a given build, so
// they may be cached briefly; the health payload carries live uptime/memory
// figures and must never be cached.

/// Welcome and service-info payloads - constant per deployment
pub const HTTP_CACHE_STATIC_PAYLOAD_MAX_AGE: u32 = 300;

// Pre-formatted Cache-Control header values (compile-time string concatenation)
pub const CACHE_CONTROL_STATIC_PAYLOAD: &str =
    formatcp!("public, max-age={}", HTTP_CACHE_STATIC_PAYLOAD_MAX_AGE);

/// Health responses are read by liveness probes and must always be fresh
pub const CACHE_CONTROL_HEALTH: &str = "no-store";

// =============================================================================
// Server Lifecycle Constants
// =============================================================================

/// Maximum time in seconds to wait for in-flight connections on shutdown
pub const SHUTDOWN_GRACE_SECS: u64 = 30;

// =============================================================================
// Memory Reporting Constants
// =============================================================================

/// Divisor converting byte counts to whole megabytes (truncating)
pub const BYTES_PER_MEGABYTE: u64 = 1_048_576;

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "pipeline_status=info";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    pub http: HttpServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;

        // Validate: only known log formats are accepted
        match config.logging.format.as_str() {
            "text" | "json" => {}
            other => {
                return Err(ConfigError::Validation(format!(
                    "Unknown logging.format '{}'. Expected \"text\" or \"json\"",
                    other
                )))
            }
        }

        Ok(config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp config");
        file.write_all(contents.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn test_load_full_config() {
        let file = write_config(
            r#"
            [http]
            host = "127.0.0.1"
            port = 9090

            [logging]
            format = "json"
            "#,
        );

        let config = AppConfig::load(file.path()).expect("config should load");
        assert_eq!(config.http.host, "127.0.0.1");
        assert_eq!(config.http.port, 9090);
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_logging_section_defaults_to_text() {
        let file = write_config(
            r#"
            [http]
            host = "0.0.0.0"
            port = 8080
            "#,
        );

        let config = AppConfig::load(file.path()).expect("config should load");
        assert_eq!(config.logging.format, DEFAULT_LOG_FORMAT);
    }

    #[test]
    fn test_unknown_log_format_rejected() {
        let file = write_config(
            r#"
            [http]
            host = "0.0.0.0"
            port = 8080

            [logging]
            format = "xml"
            "#,
        );

        let err = AppConfig::load(file.path()).expect_err("xml is not a log format");
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_missing_http_section_is_parse_error() {
        let file = write_config(
            r#"
            [logging]
            format = "text"
            "#,
        );

        let err = AppConfig::load(file.path()).expect_err("http section is required");
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_cache_control_values() {
        assert_eq!(CACHE_CONTROL_STATIC_PAYLOAD, "public, max-age=300");
        assert_eq!(CACHE_CONTROL_HEALTH, "no-store");
    }
}
