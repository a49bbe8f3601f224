//! Application settings loaded from environment variables.

use std::env;

use super::constants::{DEFAULT_MAX_PASSWORD_LENGTH, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    /// Longest candidate (in characters) the endpoint will evaluate
    pub max_password_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            max_password_length: DEFAULT_MAX_PASSWORD_LENGTH,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unset or unparsable values fall back to their defaults. `.env` is
    /// loaded by the binary before this runs.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            server_host: lookup("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: lookup("SERVER_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            max_password_length: lookup("MAX_PASSWORD_LENGTH")
                .and_then(|v| v.parse().ok())
                .filter(|max: &usize| *max > 0)
                .unwrap_or(defaults.max_password_length),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
