//! Configuration document loading.

use std::fs;
use std::path::Path;

use crate::{ConfigError, Configuration};

/// Load and parse the configuration document at `path`.
///
/// A single attempt: the file is read once and parsed once. The caller
/// decides what failure means; in this service it is fatal to startup.
///
/// # Errors
///
/// Returns [`ConfigError::ReadFailure`] if the path cannot be read (missing
/// file, permission denied, is a directory), and
/// [`ConfigError::ParseFailure`] if the contents do not match the
/// [`Configuration`] schema.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Configuration, ConfigError> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| ConfigError::read_failure(path, e))?;

    serde_yaml::from_str(&content).map_err(|e| ConfigError::parse_failure(path, e))
}
