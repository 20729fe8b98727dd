//! Server runtime configuration.
//!
//! [`ServerConfig`] is the single source of truth for the HTTP shell's
//! settings. It is built once at startup from CLI arguments (or from
//! defaults in tests) and passed into the server; the domain never reads
//! environment variables itself; populating the struct is `main.rs`'s job.

use std::net::SocketAddr;

/// All runtime configuration for the HTTP shell.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The address and port the HTTP listener binds to.
    ///
    /// `0.0.0.0` accepts connections from any interface. Set `127.0.0.1` to
    /// accept only local connections.
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    /// Local-development defaults: all interfaces, port 8080.
    fn default() -> Self {
        Self {
            // Safe to unwrap: a compile-time-known valid socket address.
            bind_addr: "0.0.0.0:8080".parse().unwrap(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_port_is_8080() {
        let cfg = ServerConfig::default();

        assert_eq!(cfg.bind_addr.port(), 8080);
    }

    #[test]
    fn test_default_bind_accepts_all_interfaces() {
        let cfg = ServerConfig::default();

        assert_eq!(cfg.bind_addr.ip().to_string(), "0.0.0.0");
    }

    #[test]
    fn test_custom_address_is_stored() {
        let cfg = ServerConfig {
            bind_addr: "127.0.0.1:9000".parse().unwrap(),
        };

        assert_eq!(cfg.bind_addr.port(), 9000);
        assert_eq!(cfg.bind_addr.ip().to_string(), "127.0.0.1");
    }
}
