//! Environment-driven server configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::error::ConfigError;

pub const DEFAULT_PORT: u16 = 3000;

/// The plugin host's origin, allowed alongside the local https origin.
pub const PLUGIN_HOST_ORIGIN: &str = "https://chat.openai.com";

#[derive(Clone, Debug)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// Directory holding `openapi.yaml`, `.well-known/ai-plugin.json` and `icon.png`.
    pub asset_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            asset_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Read `PORT`, `HOST` and `ASSET_DIR`, falling back to defaults for unset
    /// variables. Set-but-invalid values are errors.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => defaults.port,
        };

        let host = match lookup("HOST") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidHost(raw.clone()))?,
            None => defaults.host,
        };

        let asset_dir = lookup("ASSET_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.asset_dir);

        Ok(Self {
            host,
            port,
            asset_dir,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Origins permitted to make cross-origin GET requests.
    pub fn allowed_origins(&self) -> [String; 2] {
        [
            format!("https://localhost:{}", self.port),
            PLUGIN_HOST_ORIGIN.to_string(),
        ]
    }
}
