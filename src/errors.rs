// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LightsailError {
    #[error(
        "snapshot_time_of_day must be in the format \"HH:00\" (24-hour, UTC), e.g. \"06:00\" or \"18:00\". Got: \"{0}\"."
    )]
    SnapshotTimeFormat(String),

    #[error("snapshot_time_of_day hour component must be between 00 and 23. Got: \"{0}\".")]
    SnapshotTimeRange(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("JSON rendering error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, LightsailError>;
