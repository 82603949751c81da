//! Gateway configuration read from the process environment.

use crate::error::ConfigError;

/// Environment variable holding the socket address to bind.
pub const LISTEN_ADDR_VAR: &str = "CALC_LISTEN_ADDR";

/// Environment variable toggling the permissive CORS layer.
pub const CORS_ENABLED_VAR: &str = "CALC_CORS_ENABLED";

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

/// Runtime settings for the HTTP gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct GatewayConfig {
    /// Address passed to `TcpListener::bind`.
    pub listen_addr: String,
    /// Whether to install `CorsLayer::permissive()`.
    pub cors_enabled: bool,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_owned(),
            cors_enabled: false,
        }
    }
}

impl GatewayConfig {
    /// Load the configuration from the process environment.
    ///
    /// # Errors
    /// See [`GatewayConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load the configuration through `lookup`, which maps a variable name to
    /// its value. Unset variables fall back to [`GatewayConfig::default`].
    ///
    /// # Errors
    /// Returns [`ConfigError::EmptyAddr`] if the listen address is set but
    /// blank, and [`ConfigError::InvalidFlag`] if the CORS flag is not a
    /// recognised boolean.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(addr) = lookup(LISTEN_ADDR_VAR) {
            let addr = addr.trim();
            if addr.is_empty() {
                return Err(ConfigError::EmptyAddr {
                    var: LISTEN_ADDR_VAR,
                });
            }
            config.listen_addr = addr.to_owned();
        }

        if let Some(flag) = lookup(CORS_ENABLED_VAR) {
            config.cors_enabled = parse_flag(CORS_ENABLED_VAR, &flag)?;
        }

        Ok(config)
    }
}

fn parse_flag(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            var,
            value: value.to_owned(),
        }),
    }
}
