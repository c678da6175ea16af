use std::net::SocketAddrV4;
use std::str::FromStr;
use derive_more::Display;
use crate::server::error::ConfigError;

pub(crate) const DEFAULT_HOST_ADDR: &str = "127.0.0.1:8080";

/// Server configs
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ServerConfig {
    pub addr: SocketAddrV4,
    pub workers: Option<usize>,
}

impl ServerConfig {
    pub fn new(addr: SocketAddrV4, workers: Option<usize>) -> Self {
        Self {
            addr,
            workers,
        }
    }

    /// Read `HOST` and `WORKERS` from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or(DEFAULT_HOST_ADDR.to_string());
        let addr = SocketAddrV4::from_str(host.trim())
            .map_err(|_| ConfigError::InvalidHost { value: host.clone() })?;

        let workers = match lookup("WORKERS") {
            None => None,
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => Some(n),
                _ => return Err(ConfigError::InvalidWorkers { value: raw }),
            },
        };

        Ok(Self::new(addr, workers))
    }
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub(crate) enum Env {
    #[display("dev")]
    Dev,
    #[display("stg")]
    Stg,
    #[display("prod")]
    Prod,
}

impl FromStr for Env {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dev" => Ok(Self::Dev),
            "stg" => Ok(Self::Stg),
            "prod" => Ok(Self::Prod),
            s => Err(ConfigError::InvalidEnv { value: s.to_string() }),
        }
    }
}
