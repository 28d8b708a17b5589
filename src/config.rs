//! Configuration management for the campus chatbot.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is read if present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::net::IpAddr;
use std::path::PathBuf;

/// Configuration for the chatbot server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the HTTP server to (default: 127.0.0.1)
    pub host: IpAddr,

    /// Port to bind the HTTP server to (default: 5000)
    pub port: u16,

    /// Path of the JSON file holding Q&A pairs
    pub qa_data_path: PathBuf,

    /// Minimum boosted similarity score for a TF-IDF answer (0.0-1.0, default: 0.30)
    pub similarity_threshold: f64,

    /// Reply cache TTL in seconds (default: 300, 0 disables caching)
    pub reply_cache_ttl_secs: u64,

    /// Maximum accepted message length in characters (default: 500)
    pub max_message_length: usize,

    /// Token required by the admin endpoint, if any
    pub admin_token: Option<String>,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `CHATBOT_HOST`: Bind address (default: 127.0.0.1)
    /// - `CHATBOT_PORT`: Bind port (default: 5000)
    /// - `QA_DATA_PATH`: Q&A store file (default: data/qa_pairs.json)
    /// - `SIMILARITY_THRESHOLD`: Fallback confidence threshold (default: 0.30)
    /// - `REPLY_CACHE_TTL_SECS`: Reply cache TTL (default: 300)
    /// - `MAX_MESSAGE_LENGTH`: Longest accepted message (default: 500)
    /// - `ADMIN_TOKEN`: Token for the admin endpoint (default: unset)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let host = match env::var("CHATBOT_HOST") {
            Ok(val) => val.parse::<IpAddr>().map_err(|_| ConfigError::InvalidValue {
                var: "CHATBOT_HOST".to_string(),
                reason: format!("Must be an IP address, got: {}", val),
            })?,
            Err(_) => defaults.host,
        };

        let port = Self::parse_env("CHATBOT_PORT", defaults.port)?;

        let qa_data_path = env::var("QA_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.qa_data_path);

        let similarity_threshold =
            Self::parse_env("SIMILARITY_THRESHOLD", defaults.similarity_threshold)?;
        if !(0.0..=1.0).contains(&similarity_threshold) {
            return Err(ConfigError::InvalidValue {
                var: "SIMILARITY_THRESHOLD".to_string(),
                reason: "Must be between 0.0 and 1.0".to_string(),
            });
        }

        let reply_cache_ttl_secs =
            Self::parse_env("REPLY_CACHE_TTL_SECS", defaults.reply_cache_ttl_secs)?;

        let max_message_length =
            Self::parse_env("MAX_MESSAGE_LENGTH", defaults.max_message_length)?;
        if max_message_length == 0 {
            return Err(ConfigError::InvalidValue {
                var: "MAX_MESSAGE_LENGTH".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let admin_token = env::var("ADMIN_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty());

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            host,
            port,
            qa_data_path,
            similarity_threshold,
            reply_cache_ttl_secs,
            max_message_length,
            admin_token,
            log_level,
        })
    }

    /// Parse an environment variable with a default value.
    fn parse_env<T>(var_name: &str, default: T) -> ConfigResult<T>
    where
        T: std::str::FromStr,
    {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<T>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 5000,
            qa_data_path: PathBuf::from("data/qa_pairs.json"),
            similarity_threshold: 0.30,
            reply_cache_ttl_secs: 300,
            max_message_length: 500,
            admin_token: None,
            log_level: "info".to_string(),
        }
    }
}
