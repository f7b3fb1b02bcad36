//! Startup configuration for the emblem badge service.
//!
//! This crate loads and validates everything the service needs before it can
//! serve its first request:
//!
//! - Server bindings (host, port, timeouts) from environment variables
//! - The metric-definition YAML document, from a fixed default path or a
//!   `--config` override
//! - A name-indexed [`MetricRegistry`] compiled from the document, giving
//!   request handlers O(1) lookups
//!
//! Everything is resolved once, synchronously, by
//! [`RuntimeConfig::initialize`]; the result is immutable for the rest of
//! the process lifetime. Any failure (malformed environment value,
//! unreadable document, schema mismatch) is returned as a [`ConfigError`]
//! and is fatal to startup.
//!
//! # Example
//!
//! ```no_run
//! use emblem_config::RuntimeConfig;
//!
//! # fn main() -> Result<(), emblem_config::ConfigError> {
//! let runtime = RuntimeConfig::initialize(std::env::args().skip(1))?;
//!
//! if let Some(metric) = runtime.registry().get("uptime") {
//!     println!("uptime is backed by query {:?}", metric.query);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Document format
//!
//! ```yaml
//! prometheus: http://prometheus:9090
//! metrics:
//!   - name: node_load
//!     query: node_load1
//!     label: load
//!     suffix: "%"
//!     colors:
//!       - min: 0
//!         max: 50
//!         color: green
//!       - min: 50
//!         max: 100
//!         color: red
//!         valueOverride: high
//! ```

#![warn(missing_docs)]

mod bindings;
mod error;
mod loader;
mod registry;
mod runtime;
mod schema;
pub mod source;

pub use bindings::ServerBindings;
pub use error::ConfigError;
pub use loader::load;
pub use registry::MetricRegistry;
pub use runtime::RuntimeConfig;
pub use schema::{ColorRule, Configuration, MetricDefinition};

/// Crate version, for diagnostics.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let bindings = ServerBindings::default();
        assert_eq!(bindings.host, "localhost");
        assert_eq!(bindings.port, 8888);
    }

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
