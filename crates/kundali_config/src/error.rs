//! Configuration errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading or validating [`crate::KundaliSettings`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The settings file could not be read.
    #[error("cannot read settings file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The TOML text did not match the settings schema.
    #[error("invalid settings TOML: {0}")]
    Parse(#[from] toml::de::Error),
    /// A value parsed but is outside its allowed range.
    #[error("invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}
