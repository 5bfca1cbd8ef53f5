//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Interface the HTTP server binds to
    pub bind_address: IpAddr,
    /// HTTP server port
    pub server_port: u16,
    /// Whether the catalog starts with the sample records
    pub seed_catalog: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `BIND_ADDRESS` - Listen interface (default: 0.0.0.0)
    /// - `SERVER_PORT` - HTTP server port (default: 8000)
    /// - `SEED_CATALOG` - Start with sample books, `true`/`false` (default: true)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            bind_address: env_or("BIND_ADDRESS", defaults.bind_address),
            server_port: env_or("SERVER_PORT", defaults.server_port),
            seed_catalog: env_or("SEED_CATALOG", defaults.seed_catalog),
        }
    }

    /// Address the listener binds to.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.server_port)
    }
}

/// Reads and parses `key`, falling back to `default` when unset or malformed.
fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            server_port: 8000,
            seed_catalog: true,
        }
    }
}
