// src/errors.rs

//! Crate-wide error aliases and helpers.
//!
//! Only true faults end up here (unreadable or unparsable config, missing
//! object table). Dependency-shape problems are never errors: they degrade to
//! a partial schedule plus a diagnostic report.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadOrderError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Object table not found: {0}")]
    TableNotFound(String),

    #[error("{0} object(s) could not be scheduled")]
    Unresolvable(usize),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, LoadOrderError>;
