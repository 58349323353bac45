//! Server configuration parsed from environment variables.
//!
//! - `PORT`: listen port (default 3000)
//! - `BIND_ADDR`: listen address (default `0.0.0.0`)
//! - `SITE_DIR`: directory served at `/` (default `./public`)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_SITE_DIR: &str = "./public";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub site_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind_addr: DEFAULT_BIND_ADDR, port: DEFAULT_PORT, site_dir: PathBuf::from(DEFAULT_SITE_DIR) }
    }
}

/// Parse `key` through `lookup`, falling back to `default` when unset or blank.
fn env_parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
{
    match lookup(key).filter(|v| !v.trim().is_empty()) {
        Some(raw) => raw.trim().parse::<T>().map_err(|_| ConfigError::Invalid { key, value: raw }),
        None => Ok(default),
    }
}

impl ServerConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a set variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a set variable does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            bind_addr: env_parse(&lookup, "BIND_ADDR", DEFAULT_BIND_ADDR)?,
            port: env_parse(&lookup, "PORT", DEFAULT_PORT)?,
            site_dir: lookup("SITE_DIR")
                .filter(|v| !v.trim().is_empty())
                .map_or_else(|| PathBuf::from(DEFAULT_SITE_DIR), PathBuf::from),
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}
