//! Host configuration from the process environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::error::HostError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SITE_ROOT: &str = "target/site";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Directory holding the built `pkg/` bundle.
    pub site_root: PathBuf,
}

impl HostConfig {
    /// Read `HOST`, `PORT` and `SITE_ROOT`.
    ///
    /// # Errors
    ///
    /// Returns an error when `HOST` or `PORT` is set but unparsable.
    pub fn from_env() -> Result<Self, HostError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`HostConfig::from_env`] with an explicit lookup. Blank values
    /// count as unset.
    ///
    /// # Errors
    ///
    /// Returns an error when `HOST` or `PORT` is set but unparsable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, HostError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let host = match get("HOST") {
            Some(raw) => raw.parse().map_err(|_| HostError::Config { key: "HOST", value: raw })?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };
        let port = match get("PORT") {
            Some(raw) => raw.parse().map_err(|_| HostError::Config { key: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };
        let site_root = get("SITE_ROOT").map_or_else(|| PathBuf::from(DEFAULT_SITE_ROOT), PathBuf::from);

        Ok(Self { host, port, site_root })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
