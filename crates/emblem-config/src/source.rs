//! Configuration document location.
//!
//! The document path is computed once from the command line and a fixed
//! default; the default constant itself is never reassigned.

use std::path::PathBuf;

/// Default path of the configuration document.
pub const DEFAULT_CONFIG_PATH: &str = "/emblem/config.yaml";

/// Resolve the configuration document path from command-line arguments.
///
/// Recognizes `--config <path>`, `--config=<path>`, and `-c <path>`. A
/// supplied non-empty path takes precedence over [`DEFAULT_CONFIG_PATH`];
/// anything else falls back to the default. If the flag is given more than
/// once the last occurrence wins. No alternate locations are probed.
///
/// # Example
///
/// ```
/// use emblem_config::source;
///
/// let path = source::resolve(["--config", "/tmp/x.yaml"]);
/// assert_eq!(path.to_str(), Some("/tmp/x.yaml"));
///
/// let path = source::resolve(std::iter::empty::<String>());
/// assert_eq!(path.to_str(), Some(source::DEFAULT_CONFIG_PATH));
/// ```
pub fn resolve<I, S>(args: I) -> PathBuf
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut path: Option<String> = None;
    let mut args = args.into_iter().map(Into::into);

    while let Some(arg) = args.next() {
        if arg == "--config" || arg == "-c" {
            path = args.next();
        } else if let Some(value) = arg.strip_prefix("--config=") {
            path = Some(value.to_string());
        }
    }

    match path {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => PathBuf::from(DEFAULT_CONFIG_PATH),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_uses_default() {
        let path = resolve(std::iter::empty::<String>());
        assert_eq!(path, PathBuf::from(DEFAULT_CONFIG_PATH));
    }

    #[test]
    fn test_flag_with_separate_value() {
        let path = resolve(["--config", "/tmp/x.yaml"]);
        assert_eq!(path, PathBuf::from("/tmp/x.yaml"));
    }

    #[test]
    fn test_flag_with_equals_value() {
        let path = resolve(["--config=/tmp/x.yaml"]);
        assert_eq!(path, PathBuf::from("/tmp/x.yaml"));
    }

    #[test]
    fn test_short_flag() {
        let path = resolve(["-c", "/etc/emblem.yaml"]);
        assert_eq!(path, PathBuf::from("/etc/emblem.yaml"));
    }

    #[test]
    fn test_empty_value_falls_back_to_default() {
        let path = resolve(["--config", ""]);
        assert_eq!(path, PathBuf::from(DEFAULT_CONFIG_PATH));
    }

    #[test]
    fn test_missing_value_falls_back_to_default() {
        let path = resolve(["--config"]);
        assert_eq!(path, PathBuf::from(DEFAULT_CONFIG_PATH));
    }

    #[test]
    fn test_last_occurrence_wins() {
        let path = resolve(["--config", "/tmp/a.yaml", "--config=/tmp/b.yaml"]);
        assert_eq!(path, PathBuf::from("/tmp/b.yaml"));
    }

    #[test]
    fn test_unrelated_arguments_ignored() {
        let path = resolve(["--verbose", "serve"]);
        assert_eq!(path, PathBuf::from(DEFAULT_CONFIG_PATH));
    }
}
