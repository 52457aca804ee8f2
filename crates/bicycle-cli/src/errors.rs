//! Module containing custom errors emitted by the bicycle binary
//!
//! These mostly just wrap other errors, adding context.
use std::{
    fmt::{Debug, Display},
    io,
    path::PathBuf,
};

/// Custom errors that may occur when running different actions
pub enum Error {
    /// The elements or start passed can't be cycled through
    InvalidArgument(bicycle::Error),
    /// The config file exists (or was passed explicitly), but couldn't be read
    ConfigRead(PathBuf, io::Error),
    /// The config file isn't valid toml or contains unknown keys
    ConfigParse(PathBuf, toml::de::Error),
    /// Reading commands or writing elements failed
    Io(io::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(e) => write!(f, "{}", e),
            Self::ConfigRead(path, e) => write!(
                f,
                "Failed to read config at {}. Underlying io error: {}",
                path.to_string_lossy(),
                e
            ),
            Self::ConfigParse(path, e) => write!(
                f,
                "Error in config at {}. Underlying error: {}",
                path.to_string_lossy(),
                e
            ),
            Self::Io(e) => write!(f, "Underlying io error: {}", e),
        }
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

impl std::error::Error for Error {}

impl From<bicycle::Error> for Error {
    fn from(value: bicycle::Error) -> Self {
        Self::InvalidArgument(value)
    }
}
