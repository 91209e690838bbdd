//! Configuration management for the server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (optionally via a `.env` file) or
//! defaults.

use super::transport::HttpConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// HTTP listener configuration.
    pub http: HttpConfig,

    /// Resource store configuration.
    pub store: StoreConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server, used in startup logs.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in console output.
    pub with_timestamps: bool,

    /// Optional file that receives a copy of every log line.
    pub file: Option<PathBuf>,
}

/// Configuration for the resource stores.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Start with the demo coffee shops and books instead of empty stores.
    pub seed_demo_data: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            with_timestamps: true,
            file: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "crud-labs-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig::default(),
            http: HttpConfig::default(),
            store: StoreConfig::default(),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `CRUD_`.
    /// For example: `CRUD_SERVER_NAME`, `CRUD_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("CRUD_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("CRUD_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(timestamps) = std::env::var("CRUD_LOG_TIMESTAMPS") {
            config.logging.with_timestamps = parse_flag(&timestamps);
        }

        if let Ok(file) = std::env::var("CRUD_LOG_FILE") {
            if !file.is_empty() {
                config.logging.file = Some(PathBuf::from(file));
            }
        }

        config.http = HttpConfig::from_env();

        if let Ok(seed) = std::env::var("CRUD_SEED_DEMO_DATA") {
            config.store.seed_demo_data = parse_flag(&seed);
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.name, "crud-labs-server");
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.file.is_none());
        assert!(!config.store.seed_demo_data);
        assert_eq!(config.http.port, 8080);
    }

    #[test]
    fn test_from_env_overrides() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("CRUD_SEED_DEMO_DATA", "true");
            std::env::set_var("CRUD_LOG_FILE", "books_api.log");
            std::env::set_var("CRUD_HTTP_PORT", "9090");
        }
        let config = Config::from_env();
        assert!(config.store.seed_demo_data);
        assert_eq!(config.logging.file, Some(PathBuf::from("books_api.log")));
        assert_eq!(config.http.port, 9090);
        unsafe {
            std::env::remove_var("CRUD_SEED_DEMO_DATA");
            std::env::remove_var("CRUD_LOG_FILE");
            std::env::remove_var("CRUD_HTTP_PORT");
        }
    }

    #[test]
    fn test_invalid_port_falls_back() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("CRUD_HTTP_PORT", "not-a-port");
        }
        let config = Config::from_env();
        assert_eq!(config.http.port, 8080);
        unsafe {
            std::env::remove_var("CRUD_HTTP_PORT");
        }
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("TRUE"));
        assert!(parse_flag("1"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag("nope"));
    }
}
