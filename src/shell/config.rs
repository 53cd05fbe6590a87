use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;

use thiserror::Error;

use crate::modules::demo::core::flavor::{Flavor, UnknownFlavor};

pub const HOST_VAR: &str = "DEMO_HOST";
pub const PORT_VAR: &str = "DEMO_PORT";
pub const FLAVOR_VAR: &str = "DEMO_FLAVOR";

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("DEMO_HOST: `{0}` is not an IP address")]
    InvalidHost(String),

    #[error("DEMO_PORT: `{0}` is not a valid port")]
    InvalidPort(String),

    #[error("DEMO_FLAVOR: {0}")]
    InvalidFlavor(#[from] UnknownFlavor),

    #[error("failed to load env file: {0}")]
    EnvFile(String),
}

/// Loads the nearest `.env` into the process environment. Only a missing file
/// is tolerated; a malformed one is an error so later variables are not lost.
pub fn load_dotenv() -> Result<(), ConfigError> {
    ignore_missing(dotenvy::dotenv().map(drop))
}

pub fn load_env_file(path: &Path) -> Result<(), ConfigError> {
    ignore_missing(dotenvy::from_path(path))
}

fn ignore_missing(result: Result<(), dotenvy::Error>) -> Result<(), ConfigError> {
    match result {
        Ok(()) => Ok(()),
        Err(err) if err.not_found() => Ok(()),
        Err(err) => Err(ConfigError::EnvFile(err.to_string())),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
    pub flavor: Flavor,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::new(DEFAULT_HOST, DEFAULT_PORT),
            flavor: Flavor::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Unset or blank keys fall back to
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = match get(HOST_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidHost(raw))?,
            None => DEFAULT_HOST,
        };

        let port = match get(PORT_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let flavor = match get(FLAVOR_VAR) {
            Some(raw) => raw.parse::<Flavor>()?,
            None => Flavor::default(),
        };

        Ok(Self {
            addr: SocketAddr::new(host, port),
            flavor,
        })
    }
}
