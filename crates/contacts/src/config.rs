//! Environment-based runtime configuration.

use std::{net::SocketAddr, path::PathBuf};

use contacts_core::{Error, Result};

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_DB_PATH: &str = "contacts.db";

/// Runtime configuration for the contacts server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path of the SQLite database file
    pub db_path: PathBuf,
    /// Address the HTTP server binds to
    pub bind_addr: SocketAddr,
}

impl Config {
    /// Read configuration from `CONTACTS_DB_PATH` and
    /// `CONTACTS_BIND_ADDR`, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the bind address does not parse.
    pub fn from_env() -> Result<Self> {
        let db_path = std::env::var("CONTACTS_DB_PATH")
            .map_or_else(|_| PathBuf::from(DEFAULT_DB_PATH), PathBuf::from);

        let addr_str =
            std::env::var("CONTACTS_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = addr_str.parse().map_err(|e| {
            Error::validation(
                "CONTACTS_BIND_ADDR",
                format!("is not a valid socket address ({addr_str}): {e}"),
            )
        })?;

        Ok(Self { db_path, bind_addr })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bind_addr_parses() -> std::result::Result<(), std::net::AddrParseError> {
        let addr: SocketAddr = DEFAULT_BIND_ADDR.parse()?;
        assert_eq!(addr.port(), 8080);
        Ok(())
    }
}
