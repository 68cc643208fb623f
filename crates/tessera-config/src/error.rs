//! Errors raised while persisting planet settings.

use std::path::PathBuf;

/// Failure to read, write, parse or serialize `config.ron`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The settings file exists but could not be read.
    #[error("cannot read planet settings from {}: {source}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config directory or settings file could not be written.
    #[error("cannot write planet settings to {}: {source}", path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid RON for [`crate::Config`].
    #[error("invalid planet settings in {}: {source}", path.display())]
    ParseError {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    /// The in-memory settings could not be encoded as RON.
    #[error("cannot encode planet settings: {0}")]
    SerializeError(#[source] ron::Error),
}
