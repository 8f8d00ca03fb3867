//! Server configuration parsed from environment variables.
//!
//! Recognized:
//! - `HOST`: bind address, default `0.0.0.0`
//! - `PORT`: listen port, default `3000`
//! - `SITE_URL`: public origin used in the sitemap, default `http://localhost:3000`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::SocketAddr;

use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SITE_URL: &str = "http://localhost:3000";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid HOST/PORT combination: {0}")]
    InvalidAddr(String),
    #[error("SITE_URL must not be empty")]
    EmptySiteUrl,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Public origin without a trailing slash.
    pub site_url: String,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPort` when `PORT` is not a `u16` and `EmptySiteUrl`
    /// when `SITE_URL` is blank.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_owned());

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let site_url = lookup("SITE_URL").unwrap_or_else(|| DEFAULT_SITE_URL.to_owned());
        let site_url = site_url.trim().trim_end_matches('/').to_owned();
        if site_url.is_empty() {
            return Err(ConfigError::EmptySiteUrl);
        }

        Ok(Self { host, port, site_url })
    }

    /// Socket address to bind.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAddr` when `HOST` is not an IP literal.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse().map_err(|_| ConfigError::InvalidAddr(raw))
    }
}
