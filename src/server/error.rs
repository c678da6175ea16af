use derive_more::{Display, Error};

/// Startup configuration failures
#[derive(Debug, Display, Error, PartialEq, Eq)]
pub(crate) enum ConfigError {
    #[display("invalid APP_ENV: {value}")]
    InvalidEnv { value: String },
    #[display("invalid HOST: {value}")]
    InvalidHost { value: String },
    #[display("invalid WORKERS: {value}")]
    InvalidWorkers { value: String },
}
