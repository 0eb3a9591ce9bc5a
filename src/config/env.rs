// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load and validate configuration from .env files

use dotenv::dotenv;
use std::env;

/// Application configuration loaded from environment variables
/// Centralizes all configuration in one struct
/// Load with Config::from_env() at application startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "127.0.0.1")
    pub server_address: String,

    /// Server listen port (default 5000)
    pub server_port: u16,

    /// Environment: development, staging, production
    pub environment: String,

    /// Log level: debug, info, warn, error
    pub log_level: String,

    /// Path of the JSON storage file. Empty string means in-memory only
    /// (nothing survives a restart).
    pub storage_file: String,
}

impl Config {
    /// Load configuration from environment variables
    /// Reads from .env or the process environment, called once at startup
    pub fn from_env() -> Self {
        dotenv().ok();

        Config {
            server_address: env::var("SERVER_ADDRESS").unwrap_or_else(|_| "127.0.0.1".to_string()),

            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .unwrap_or(5000),

            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),

            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),

            storage_file: env::var("STORAGE_FILE").unwrap_or_else(|_| "openstay.json".to_string()),
        }
    }

    /// Validate critical configuration
    /// Ensures the application can start safely
    pub fn validate(&self) -> Result<(), String> {
        if self.server_address.is_empty() {
            return Err("SERVER_ADDRESS must not be empty".to_string());
        }

        if self.storage_file.is_empty() {
            log::warn!("STORAGE_FILE not configured - data will not survive restarts");
        }

        Ok(())
    }
}
