//! Application configuration loaded via OrthoConfig.
//!
//! Settings merge built-in defaults, an optional configuration file,
//! `CONTACTBOOK_`-prefixed environment variables, and command-line flags, in
//! that order of precedence.

use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_DATA_DIR: &str = "./data";

/// Runtime settings for the contact book server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CONTACTBOOK")]
pub struct AppSettings {
    /// Socket address the HTTP listener binds.
    pub bind_addr: Option<String>,
    /// Directory holding the contact collection file.
    pub data_dir: Option<PathBuf>,
}

impl AppSettings {
    /// Return the configured bind address, falling back to the default.
    #[must_use]
    pub fn bind_addr(&self) -> &str {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR)
    }

    /// Return the configured data directory, falling back to the default.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
    }
}
