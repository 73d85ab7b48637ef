//! Server configuration from environment variables
//!
//! - `PORT` (default 3000)
//! - `BIND_ADDR` (default 0.0.0.0)
//! - `DASHBOARD_VARIANT` (default `a`): dataset served at `/`
//!
//! Unparseable values fall back to the default with a warning.

use crate::data::DatasetVariant;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub bind_addr: IpAddr,
    pub default_variant: DatasetVariant,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            default_variant: DatasetVariant::A,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (environment, test map)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = parse_or(&lookup, "PORT", defaults.port);
        let bind_addr = parse_or(&lookup, "BIND_ADDR", defaults.bind_addr);
        let default_variant = parse_or(&lookup, "DASHBOARD_VARIANT", defaults.default_variant);

        Self {
            port,
            bind_addr,
            default_variant,
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring invalid {}={:?}, using default", key, raw);
            default
        }),
    }
}
