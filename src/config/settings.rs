//! Server settings read from the environment.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::{EngineError, EngineResult};

/// Environment variable naming the pricing YAML file.
pub const CONFIG_PATH_VAR: &str = "CINEMA_PRICING_CONFIG";

/// Environment variable naming the listen address.
pub const BIND_ADDR_VAR: &str = "CINEMA_PRICING_ADDR";

/// Listen address used when [`BIND_ADDR_VAR`] is unset.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Settings for the HTTP server binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    /// Address the server listens on.
    pub bind_addr: SocketAddr,
    /// Pricing file to load; built-in defaults are used when `None`.
    pub config_path: Option<PathBuf>,
}

impl ServerSettings {
    /// Reads settings from the process environment.
    pub fn from_env() -> EngineResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads settings through an arbitrary lookup function.
    pub fn from_lookup<F>(lookup: F) -> EngineResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .parse::<SocketAddr>()
            .map_err(|e| EngineError::InvalidConfig {
                field: BIND_ADDR_VAR.to_string(),
                message: format!("'{}': {}", raw_addr, e),
            })?;

        let config_path = lookup(CONFIG_PATH_VAR)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            bind_addr,
            config_path,
        })
    }
}
