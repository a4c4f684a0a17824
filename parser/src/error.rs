//! @ai:module:intent Define error types for the file-facing parts of docfields
//! @ai:module:layer domain
//! @ai:module:public_api Error, Result
//! @ai:module:stateless true
//!
//! Docstring parsing itself never fails; these errors cover reading inputs around it.

use std::path::PathBuf;
use thiserror::Error;

/// @ai:intent Unified error type for docfields I/O, config and signature loading
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid signature file {path}: {source}")]
    Signature {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to write config: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    #[error("Failed to walk {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
