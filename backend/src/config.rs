//! Service settings loaded via OrthoConfig.
//!
//! Values are merged from an optional configuration file, `CATALOG_*`
//! environment variables and CLI flags; later sources win.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Errors raised while interpreting loaded settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// `bind_addr` is not a socket address.
    #[error("invalid bind address {value:?}: {message}")]
    BindAddr { value: String, message: String },
    /// `database_max_connections` must be positive.
    #[error("database_max_connections must be at least 1")]
    MaxConnections,
}

/// Configuration for the category service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CATALOG")]
pub struct CatalogSettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection URL. Without one the in-memory store is used.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub database_max_connections: Option<u32>,
    /// Leave the schema untouched at startup.
    #[ortho_config(default = false)]
    pub skip_migrations: bool,
}

impl CatalogSettings {
    /// Parsed bind address, falling back to `0.0.0.0:8080`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::BindAddr`] when the value does not parse.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|err: std::net::AddrParseError| SettingsError::BindAddr {
            value: raw.to_owned(),
            message: err.to_string(),
        })
    }

    /// Configured database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Pool size, falling back to 10.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::MaxConnections`] for zero.
    pub fn database_max_connections(&self) -> Result<u32, SettingsError> {
        match self.database_max_connections {
            Some(0) => Err(SettingsError::MaxConnections),
            Some(value) => Ok(value),
            None => Ok(DEFAULT_MAX_CONNECTIONS),
        }
    }

    /// Whether embedded migrations run before the server starts.
    pub fn run_migrations(&self) -> bool {
        !self.skip_migrations
    }
}
