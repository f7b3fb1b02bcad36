//! Server binding resolution from the process environment.
//!
//! The listener collaborator needs a host, a port, and read/write timeouts
//! before it can open a socket. All four come from environment variables
//! with documented defaults; a variable that is set but malformed is a hard
//! error rather than a silent fallback.

use std::time::Duration;

use crate::ConfigError;

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 8888;

/// Resolved server bindings.
///
/// Constructed exactly once at startup via [`ServerBindings::from_env`] and
/// never mutated afterwards. A zero timeout means "no timeout".
///
/// # Example
///
/// ```
/// use emblem_config::ServerBindings;
///
/// let bindings = ServerBindings::from_env().unwrap();
/// println!("listening on {}", bindings.addr());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerBindings {
    /// Host to bind the listener to (`SERVER_HOST`, default `localhost`).
    pub host: String,
    /// Port to bind the listener to (`SERVER_PORT`, default `8888`).
    pub port: u16,
    /// Read timeout for the listener (`SERVER_READ_TIMEOUT`, default none).
    pub read_timeout: Duration,
    /// Write timeout for the listener (`SERVER_WRITE_TIMEOUT`, default none).
    pub write_timeout: Duration,
}

impl Default for ServerBindings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            read_timeout: Duration::ZERO,
            write_timeout: Duration::ZERO,
        }
    }
}

impl ServerBindings {
    /// Resolve bindings from the process environment.
    ///
    /// Reads `SERVER_HOST`, `SERVER_PORT`, `SERVER_READ_TIMEOUT`, and
    /// `SERVER_WRITE_TIMEOUT`. A variable that is absent or empty falls back
    /// to its default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnvironment`] if a variable is present
    /// but malformed: a port that is not an integer in 1..=65535, or a
    /// timeout that does not parse as a duration.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(|var| std::env::var(var).ok())
    }

    /// Combined `host:port` address for socket setup.
    #[must_use]
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    // Resolution goes through a lookup closure so tests can inject
    // variables without touching the real process environment.
    fn resolve<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = match value_of(&lookup, "SERVER_HOST") {
            Some(host) => host,
            None => DEFAULT_HOST.to_string(),
        };

        let port = match value_of(&lookup, "SERVER_PORT") {
            Some(raw) => parse_port("SERVER_PORT", &raw)?,
            None => DEFAULT_PORT,
        };

        let read_timeout = match value_of(&lookup, "SERVER_READ_TIMEOUT") {
            Some(raw) => parse_timeout("SERVER_READ_TIMEOUT", &raw)?,
            None => Duration::ZERO,
        };

        let write_timeout = match value_of(&lookup, "SERVER_WRITE_TIMEOUT") {
            Some(raw) => parse_timeout("SERVER_WRITE_TIMEOUT", &raw)?,
            None => Duration::ZERO,
        };

        Ok(Self {
            host,
            port,
            read_timeout,
            write_timeout,
        })
    }
}

// An empty variable counts as absent.
fn value_of<F>(lookup: &F, var: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var).filter(|value| !value.is_empty())
}

fn parse_port(var: &str, raw: &str) -> Result<u16, ConfigError> {
    match raw.parse::<u16>() {
        Ok(0) | Err(_) => Err(ConfigError::invalid_environment(
            var,
            raw,
            "expected integer in 1..=65535",
        )),
        Ok(port) => Ok(port),
    }
}

fn parse_timeout(var: &str, raw: &str) -> Result<Duration, ConfigError> {
    parse_duration(raw).ok_or_else(|| {
        ConfigError::invalid_environment(
            var,
            raw,
            "expected duration such as '150ms', '10s', '2m', '1h', or plain seconds",
        )
    })
}

// Duration syntax: an integer with an optional ms/s/m/h suffix; a bare
// integer is taken as seconds.
fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if let Some(stripped) = s.strip_suffix("ms") {
        let n: u64 = stripped.trim().parse().ok()?;
        Some(Duration::from_millis(n))
    } else if let Some(stripped) = s.strip_suffix('s') {
        let n: u64 = stripped.trim().parse().ok()?;
        Some(Duration::from_secs(n))
    } else if let Some(stripped) = s.strip_suffix('m') {
        let n: u64 = stripped.trim().parse().ok()?;
        n.checked_mul(60).map(Duration::from_secs)
    } else if let Some(stripped) = s.strip_suffix('h') {
        let n: u64 = stripped.trim().parse().ok()?;
        n.checked_mul(3600).map(Duration::from_secs)
    } else {
        let n: u64 = s.parse().ok()?;
        Some(Duration::from_secs(n))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn resolve_with(vars: &[(&str, &str)]) -> Result<ServerBindings, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        ServerBindings::resolve(|var| vars.get(var).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let bindings = resolve_with(&[]).unwrap();
        assert_eq!(bindings.host, "localhost");
        assert_eq!(bindings.port, 8888);
        assert_eq!(bindings.read_timeout, Duration::ZERO);
        assert_eq!(bindings.write_timeout, Duration::ZERO);
    }

    #[test]
    fn test_port_override() {
        let bindings = resolve_with(&[("SERVER_PORT", "9000")]).unwrap();
        assert_eq!(bindings.port, 9000);
        assert_eq!(bindings.host, "localhost");
        assert_eq!(bindings.read_timeout, Duration::ZERO);
        assert_eq!(bindings.write_timeout, Duration::ZERO);
    }

    #[test]
    fn test_host_override() {
        let bindings = resolve_with(&[("SERVER_HOST", "0.0.0.0")]).unwrap();
        assert_eq!(bindings.host, "0.0.0.0");
        assert_eq!(bindings.port, 8888);
    }

    #[test]
    fn test_timeout_override() {
        let bindings = resolve_with(&[
            ("SERVER_READ_TIMEOUT", "10s"),
            ("SERVER_WRITE_TIMEOUT", "500ms"),
        ])
        .unwrap();
        assert_eq!(bindings.read_timeout, Duration::from_secs(10));
        assert_eq!(bindings.write_timeout, Duration::from_millis(500));
    }

    #[test]
    fn test_malformed_port_fails() {
        let err = resolve_with(&[("SERVER_PORT", "notanumber")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidEnvironment { ref var, .. } if var == "SERVER_PORT"
        ));
    }

    #[test]
    fn test_port_zero_fails() {
        let err = resolve_with(&[("SERVER_PORT", "0")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvironment { .. }));
    }

    #[test]
    fn test_port_out_of_range_fails() {
        let err = resolve_with(&[("SERVER_PORT", "70000")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvironment { .. }));
    }

    #[test]
    fn test_overflowing_timeout_fails() {
        // Large enough that converting hours to seconds exceeds u64.
        let err =
            resolve_with(&[("SERVER_READ_TIMEOUT", "9999999999999999999h")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidEnvironment { ref var, .. } if var == "SERVER_READ_TIMEOUT"
        ));
    }

    #[test]
    fn test_malformed_timeout_fails() {
        let err = resolve_with(&[("SERVER_READ_TIMEOUT", "soon")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidEnvironment { ref var, .. } if var == "SERVER_READ_TIMEOUT"
        ));
    }

    #[test]
    fn test_empty_value_counts_as_absent() {
        let bindings = resolve_with(&[("SERVER_PORT", ""), ("SERVER_HOST", "")]).unwrap();
        assert_eq!(bindings.host, "localhost");
        assert_eq!(bindings.port, 8888);
    }

    #[test]
    fn test_parse_duration_forms() {
        assert_eq!(parse_duration("150ms"), Some(Duration::from_millis(150)));
        assert_eq!(parse_duration("10s"), Some(Duration::from_secs(10)));
        assert_eq!(parse_duration("2m"), Some(Duration::from_secs(120)));
        assert_eq!(parse_duration("1h"), Some(Duration::from_secs(3600)));
        assert_eq!(parse_duration("45"), Some(Duration::from_secs(45)));
        assert_eq!(parse_duration("0"), Some(Duration::ZERO));
        assert_eq!(parse_duration("soon"), None);
        assert_eq!(parse_duration(""), None);
        assert_eq!(parse_duration("-5s"), None);
        assert_eq!(parse_duration("9999999999999999999m"), None);
        assert_eq!(parse_duration("9999999999999999999h"), None);
    }

    #[test]
    fn test_addr() {
        let bindings = ServerBindings::default();
        assert_eq!(bindings.addr(), "localhost:8888");
    }
}
