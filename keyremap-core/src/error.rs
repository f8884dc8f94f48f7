//! Error types for the KeyRemap engine

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Mapping config error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("Mapping JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
