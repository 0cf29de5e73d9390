//! HTTP server configuration object and helpers.

use std::env;
use std::net::SocketAddr;

/// Default listen address when `SERVER_BIND_ADDR` is unset.
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Configuration for creating the HTTP server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Construct a server configuration with an explicit bind address.
    #[must_use]
    pub const fn new(bind_addr: SocketAddr) -> Self {
        Self { bind_addr }
    }

    /// Read the configuration from the environment.
    ///
    /// # Errors
    /// Returns [`std::io::Error`] when `SERVER_BIND_ADDR` is set but does not
    /// parse as a socket address.
    pub fn from_env() -> std::io::Result<Self> {
        let raw = env::var("SERVER_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_owned());
        let bind_addr = raw.parse().map_err(|e| {
            std::io::Error::other(format!("invalid SERVER_BIND_ADDR {raw:?}: {e}"))
        })?;
        Ok(Self::new(bind_addr))
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use super::*;

    #[test]
    fn explicit_address_round_trips() {
        let addr: SocketAddr = "127.0.0.1:9090".parse().expect("socket address");
        let config = ServerConfig::new(addr);
        assert_eq!(config.bind_addr(), addr);
    }

    #[test]
    fn default_address_parses() {
        let addr: SocketAddr = DEFAULT_BIND_ADDR.parse().expect("default socket address");
        assert_eq!(addr.port(), 8080);
    }
}
