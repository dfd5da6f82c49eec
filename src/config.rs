use std::net::{IpAddr, SocketAddr};

use serde::{Deserialize, Serialize};

use crate::error::{CohortError, Result};

/// Runtime settings for the HTTP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind, e.g. "127.0.0.1" or "0.0.0.0"
    pub host: String,
    pub port: u16,
    /// Load the semester reference data before serving
    pub seed: bool,
    /// tracing filter used when RUST_LOG is unset
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            seed: true,
            log_filter: "cohort=info".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| CohortError::Config(format!("invalid host address: {}", self.host)))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
