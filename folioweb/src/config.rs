//! Configuration loader and defaults for the folioweb server.
//!
//! Exposes a lazily-initialized `CONFIG` which reads values from
//! environment variables (with sensible defaults). The only configurable
//! pieces are the listening address (`bind`) and port (`port`); everything
//! the server publishes is a fixed in-process record.
//!
use std::env;

use once_cell::sync::Lazy;

/// Default bind address for the HTTP listener
const DEFAULT_BIND: &str = "0.0.0.0";

/// Default HTTP port
const DEFAULT_PORT: u16 = 8000;

/// Application configuration containing the listener settings
pub struct Config {
    /// Address the HTTP listener binds to
    pub bind: String,
    /// HTTP port
    pub port: u16,
}

impl Config {
    /// Socket address string for the listener, e.g. `0.0.0.0:8000`
    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

/// Global application configuration instance, lazily initialized
pub static CONFIG: Lazy<Config> = Lazy::new(|| Config {
    bind: env::var("FOLIO_BIND").unwrap_or_else(|_| DEFAULT_BIND.into()),
    port: env::var("FOLIO_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_PORT),
});

#[cfg(test)]
mod tests {
    use super::*;

    /// Default listener settings form a parseable socket address
    #[test]
    fn default_addr_parses() {
        let config = Config {
            bind: DEFAULT_BIND.into(),
            port: DEFAULT_PORT,
        };
        assert!(config.addr().parse::<std::net::SocketAddr>().is_ok());
    }
}
