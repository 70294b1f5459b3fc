//! HTTP server configuration object and helpers.

use std::env;
use std::net::SocketAddr;

use backend::outbound::persistence::StoreConfig;

/// Configuration for creating the HTTP server, read from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) store: StoreConfig,
}

impl ServerConfig {
    /// Read configuration from `HERODEX_*` environment variables, falling
    /// back to local-development defaults.
    ///
    /// # Errors
    /// Returns [`std::io::Error`] when `HERODEX_BIND_ADDR` is present but
    /// not a valid socket address.
    pub fn from_env() -> std::io::Result<Self> {
        let bind_addr = env::var("HERODEX_BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".into())
            .parse()
            .map_err(|err| {
                std::io::Error::other(format!("HERODEX_BIND_ADDR is not a socket address: {err}"))
            })?;
        let store = StoreConfig {
            url: env::var("HERODEX_DB_URL").unwrap_or_else(|_| "ws://localhost:8000".into()),
            namespace: env::var("HERODEX_DB_NAMESPACE").unwrap_or_else(|_| "herodex".into()),
            database: env::var("HERODEX_DB_DATABASE").unwrap_or_else(|_| "catalogue".into()),
        };
        Ok(Self { bind_addr, store })
    }

    /// The socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Document store connection settings.
    #[must_use]
    pub fn store(&self) -> &StoreConfig {
        &self.store
    }
}
