//! Server configuration, read from the `grpc` section of the service config.

use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

use crate::error::GrpcError;

/// Configuration for gRPC server.
///
/// ```yaml
/// grpc:
///   host: 0.0.0.0
///   port: 44044
///   timeout: 5s
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ServerConfig {
    /// Host to bind to (default: 0.0.0.0)
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Per-request timeout applied by the transport (default: none)
    #[serde(default, deserialize_with = "core_config::duration::deserialize_opt")]
    pub timeout: Option<Duration>,
    /// Enable Zstd compression (default: true)
    #[serde(default = "default_true")]
    pub enable_compression: bool,
    /// Maximum message size for decoding and encoding (default: 4MB)
    #[serde(default = "default_max_message_size")]
    pub max_message_size: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_true() -> bool {
    true
}

fn default_max_message_size() -> usize {
    4 * 1024 * 1024
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: 44044,
            timeout: None,
            enable_compression: true,
            max_message_size: default_max_message_size(),
        }
    }
}

impl ServerConfig {
    /// Create a new server config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the host to bind to.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the port to listen on.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Enable or disable compression.
    pub fn with_compression(mut self, enable: bool) -> Self {
        self.enable_compression = enable;
        self
    }

    /// Get the socket address to bind to.
    ///
    /// IPv6 hosts may be given with or without brackets.
    pub fn socket_addr(&self) -> Result<SocketAddr, GrpcError> {
        let addr = self.addr_string();
        addr.parse()
            .map_err(|source| GrpcError::InvalidAddress { addr, source })
    }

    /// Get the address string (for logging).
    pub fn addr_string(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}
