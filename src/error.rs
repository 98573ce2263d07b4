// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Snapshot(String),
    Cli(String),
    /// Image generation failed. This is the only failure the store surfaces to
    /// the view layer, through its `error` field.
    Load(String),
}

impl Error {
    /// Returns the bare message carried by the error, without its category prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Error::Io(msg)
            | Error::Config(msg)
            | Error::Snapshot(msg)
            | Error::Cli(msg)
            | Error::Load(msg) => msg,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Snapshot(e) => write!(f, "Snapshot Error: {}", e),
            Error::Cli(e) => write!(f, "Argument Error: {}", e),
            Error::Load(e) => write!(f, "Failed to load images: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<ciborium::de::Error<std::io::Error>> for Error {
    fn from(err: ciborium::de::Error<std::io::Error>) -> Self {
        Error::Snapshot(err.to_string())
    }
}

impl From<ciborium::ser::Error<std::io::Error>> for Error {
    fn from(err: ciborium::ser::Error<std::io::Error>) -> Self {
        Error::Snapshot(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<pico_args::Error> for Error {
    fn from(err: pico_args::Error) -> Self {
        Error::Cli(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
