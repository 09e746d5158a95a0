use std::path::PathBuf;

use thiserror::Error;

/// Startup-time configuration errors.
///
/// Every variant is fatal and is raised before any task is submitted.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid report format '{0}', expected one of: csv, tsv, table")]
    InvalidFormat(String),

    #[error("profile '{0}' not found in configuration")]
    ProfileNotFound(String),

    #[error("no resource selected, pass at least one of --domain, --limits, --network, --vm, --volume")]
    NoResourceSelected,

    #[error("invalid worker count {0}, must be at least 1")]
    InvalidWorkers(usize),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
