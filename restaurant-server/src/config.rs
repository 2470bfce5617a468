//! Server configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::places::CacheConfig;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_STATIC_DIR: &str = "static";

/// Error from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {var}={value:?}: {reason}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub reason: String,
}

/// Runtime configuration for the server.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Address to listen on (`BIND_ADDR`).
    pub bind_addr: SocketAddr,

    /// Directory served under `/static` (`STATIC_DIR`).
    pub static_dir: PathBuf,

    /// JSON candidate file (`RESTAURANTS_FILE`). `None` uses the built-in set.
    pub restaurants_file: Option<PathBuf>,

    /// Places cache settings (`PLACES_CACHE_TTL_SECS`, `PLACES_CACHE_CAPACITY`).
    pub cache: CacheConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            restaurants_file: None,
            cache: CacheConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, which returns a variable's value
    /// if set. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let bind_addr = get("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError {
                var: "BIND_ADDR",
                value: lookup("BIND_ADDR").unwrap_or_default(),
                reason: e.to_string(),
            })?;

        let static_dir = get("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);

        let restaurants_file = get("RESTAURANTS_FILE").map(PathBuf::from);

        let ttl = match get("PLACES_CACHE_TTL_SECS") {
            Some(v) => Duration::from_secs(parse_number("PLACES_CACHE_TTL_SECS", &v)?),
            None => defaults.cache.ttl,
        };

        let max_capacity = match get("PLACES_CACHE_CAPACITY") {
            Some(v) => parse_number("PLACES_CACHE_CAPACITY", &v)?,
            None => defaults.cache.max_capacity,
        };

        Ok(Self {
            bind_addr,
            static_dir,
            restaurants_file,
            cache: CacheConfig { ttl, max_capacity },
        })
    }
}

fn parse_number(var: &'static str, value: &str) -> Result<u64, ConfigError> {
    value.trim().parse::<u64>().map_err(|e| ConfigError {
        var,
        value: value.to_string(),
        reason: e.to_string(),
    })
}
