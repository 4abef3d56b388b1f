//! Error types for growth-core.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GrowthError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML config error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid value for '{key}' on line {line}: {value:?}")]
    InvalidValue {
        key: String,
        value: String,
        line: usize,
    },

    #[error("Invalid value for '{key}': {value:?}")]
    InvalidEntry { key: String, value: String },

    #[error("Could not open config file: {}", path.display())]
    ConfigUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Exponent must be at least 1 (got {0})")]
    ExponentTooSmall(i32),
}

pub type Result<T> = std::result::Result<T, GrowthError>;
