//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving the startup configuration.
///
/// Every variant is fatal to startup: nothing below the runtime facade
/// retries, recovers, or terminates the process on its own. Components
/// return errors and the binary decides what to do with them.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An environment variable was present but could not be parsed.
    ///
    /// Absent or empty variables fall back to their defaults; a variable
    /// that is set to a malformed value fails instead of being silently
    /// replaced by the default.
    #[error("invalid value for environment variable {var}: {value:?}: {reason}")]
    InvalidEnvironment {
        /// The environment variable name.
        var: String,
        /// The raw value that failed to parse.
        value: String,
        /// Explanation of the parsing failure.
        reason: String,
    },

    /// The configuration document could not be read.
    #[error("failed to read configuration file: {path}")]
    ReadFailure {
        /// Path to the document.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration document does not match the expected schema.
    #[error("failed to parse configuration file: {path}")]
    ParseFailure {
        /// Path to the document.
        path: PathBuf,
        /// Underlying YAML/schema error.
        #[source]
        source: serde_yaml::Error,
    },
}

impl ConfigError {
    /// Create a new invalid environment variable error.
    pub fn invalid_environment(
        var: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidEnvironment {
            var: var.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a new read failure error.
    pub fn read_failure(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFailure {
            path: path.into(),
            source,
        }
    }

    /// Create a new parse failure error.
    pub fn parse_failure(path: impl Into<PathBuf>, source: serde_yaml::Error) -> Self {
        Self::ParseFailure {
            path: path.into(),
            source,
        }
    }
}
