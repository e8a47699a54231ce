//! Server configuration parsed from environment variables.
//!
//! `.env` is loaded by `main` before this runs, so values there behave like
//! real environment variables. Leptos build options (site root, output name)
//! come separately from `get_configuration`.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    #[error("invalid BIND_ADDR: {0}")]
    InvalidBindAddr(String),

    #[error("invalid boolean for {var}: {value}")]
    InvalidBool { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// Gzip responses.
    pub compression: bool,
    /// Overrides the Leptos site root for static assets (`/pkg`, `/profile.jpg`).
    pub assets_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind_addr: DEFAULT_BIND_ADDR, port: DEFAULT_PORT, compression: true, assets_dir: None }
    }
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `HTTP_COMPRESSION`: `1/0`, `true/false`, `yes/no`, `on/off`; default on
    /// - `ASSETS_DIR`: static asset root; default Leptos `site_root`
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a variable is set but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.port,
        };
        let bind_addr = match lookup("BIND_ADDR") {
            Some(raw) => raw.trim().parse::<IpAddr>().map_err(|_| ConfigError::InvalidBindAddr(raw))?,
            None => defaults.bind_addr,
        };
        let compression = match lookup("HTTP_COMPRESSION") {
            Some(raw) => {
                parse_bool(&raw).ok_or(ConfigError::InvalidBool { var: "HTTP_COMPRESSION", value: raw })?
            }
            None => defaults.compression,
        };
        let assets_dir = lookup("ASSETS_DIR")
            .filter(|raw| !raw.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self { bind_addr, port, compression, assets_dir })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
