//! Server settings read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::{EngineError, EngineResult};

/// Default listen host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listen port.
pub const DEFAULT_PORT: u16 = 8080;

/// Settings for the HTTP server binary.
///
/// # Environment Variables
///
/// - `HOST`: listen host (default `0.0.0.0`)
/// - `PORT`: listen port (default `8080`)
/// - `PAY_RULES_PATH`: pay rules YAML file (default: built-in table)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Listen host.
    pub host: String,
    /// Listen port.
    pub port: u16,
    /// Optional pay rules file.
    pub pay_rules_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Reads the settings from process environment variables.
    pub fn from_env() -> EngineResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the settings through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> EngineResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|_| EngineError::ConfigParseError {
                path: "PORT".to_string(),
                message: format!("'{}' is not a valid port", raw),
            })?,
            None => DEFAULT_PORT,
        };
        let pay_rules_path = lookup("PAY_RULES_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            host,
            port,
            pay_rules_path,
        })
    }

    /// The socket address to bind.
    pub fn socket_addr(&self) -> EngineResult<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| EngineError::ConfigParseError {
                path: "HOST".to_string(),
                message: format!("'{}' is not a valid host", self.host),
            })
    }
}
