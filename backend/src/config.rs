//! Environment-driven server settings.
//!
//! - `TRIANGLE_BIND`: socket address to listen on (default `127.0.0.1:3000`)
//! - `TRIANGLE_STATIC_DIR`: optional directory served for non-API paths

use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid bind address '{0}': {1}")]
    InvalidBind(String, std::net::AddrParseError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind: SocketAddr,
    pub static_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var("TRIANGLE_BIND").ok(),
            std::env::var("TRIANGLE_STATIC_DIR").ok(),
        )
    }

    fn from_vars(bind: Option<String>, static_dir: Option<String>) -> Result<Self, ConfigError> {
        let bind = bind.unwrap_or_else(|| DEFAULT_BIND.to_string());
        let addr = bind
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidBind(bind.clone(), e))?;
        Ok(Self {
            bind: addr,
            static_dir: static_dir.filter(|d| !d.is_empty()).map(PathBuf::from),
        })
    }
}
