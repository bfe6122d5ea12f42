//! Error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BubbleError {
    #[error("invalid nip location '{0}': expected one of top, right, bottom, left, top-left, top-right, bottom-left, bottom-right")]
    InvalidNipLocation(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
