//! Server configuration.

use std::net::SocketAddr;

/// Environment variable holding the listen address.
pub const BIND_ADDR_VAR: &str = "METRO_BIND_ADDR";

/// Environment variable toggling the demo line.
pub const SEED_DEMO_VAR: &str = "METRO_SEED_DEMO";

/// Error loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Listen address did not parse
    #[error("invalid METRO_BIND_ADDR {value:?}: expected host:port")]
    InvalidBindAddr { value: String },

    /// Seed flag was not a recognised boolean
    #[error("invalid METRO_SEED_DEMO {value:?}: expected true/false/1/0")]
    InvalidSeedFlag { value: String },
}

/// Configuration for the HTTP server binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind_addr: SocketAddr,

    /// Load the Karachi demo line at startup.
    pub seed_demo_line: bool,
}

impl ServerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(bind_addr: SocketAddr, seed_demo_line: bool) -> Self {
        Self {
            bind_addr,
            seed_demo_line,
        }
    }

    /// Load from the process environment, falling back to defaults for
    /// unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(BIND_ADDR_VAR) {
            config.bind_addr = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidBindAddr { value })?;
        }

        if let Some(value) = lookup(SEED_DEMO_VAR) {
            config.seed_demo_line = match value.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => return Err(ConfigError::InvalidSeedFlag { value }),
            };
        }

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            seed_demo_line: true,
        }
    }
}
