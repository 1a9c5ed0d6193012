//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {value:?}")]
    InvalidPort { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Course catalog JSON served by `/api/courses`; embedded content when absent.
    pub content_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `CONTENT_PATH`: JSON array of courses overriding the embedded catalog
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but is not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an injectable variable source.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but is not a valid port number.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT").map(|v| v.trim().to_owned()).filter(|v| !v.is_empty()) {
            None => DEFAULT_PORT,
            Some(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidPort { value })?,
        };
        let content_path = lookup("CONTENT_PATH")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Ok(Self { port, content_path })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}
