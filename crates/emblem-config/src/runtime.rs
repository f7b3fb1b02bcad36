//! Startup orchestration.
//!
//! [`RuntimeConfig::initialize`] is the single entry point that resolves
//! bindings, locates and loads the document, and compiles the registry, in
//! that order. It runs once, synchronously, before anything else in the
//! process starts. It never terminates the process itself: every failure is
//! returned to the caller, which is the sole place that decides to exit.

use crate::{loader, source, ConfigError, MetricRegistry, ServerBindings};

/// The immutable runtime configuration of the service.
///
/// Produced exactly once by [`RuntimeConfig::initialize`] and then handed by
/// value (or reference) to the components that need it. There is no global
/// slot, no reload, and no mutation after construction.
///
/// # Example
///
/// ```no_run
/// use emblem_config::RuntimeConfig;
///
/// # fn main() -> Result<(), emblem_config::ConfigError> {
/// let runtime = RuntimeConfig::initialize(std::env::args().skip(1))?;
/// println!(
///     "{} metrics registered, listening on {}",
///     runtime.registry().len(),
///     runtime.bindings().addr(),
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    bindings: ServerBindings,
    prometheus: Option<String>,
    registry: MetricRegistry,
}

impl RuntimeConfig {
    /// Resolve the full runtime configuration.
    ///
    /// Sequence: server bindings from the environment, document path from
    /// `args` (`--config` wins over the default), document load, registry
    /// compilation. Strictly linear; no step feeds back into an earlier one.
    ///
    /// # Errors
    ///
    /// Propagates [`ConfigError`] from any step unchanged. All of them are
    /// fatal to startup: the caller must not serve requests on failure.
    pub fn initialize<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let bindings = ServerBindings::from_env()?;
        let path = source::resolve(args);
        let configuration = loader::load(&path)?;
        let registry = MetricRegistry::compile(configuration.metrics);

        Ok(Self {
            bindings,
            prometheus: configuration.prometheus,
            registry,
        })
    }

    /// Resolved server bindings for socket setup.
    #[must_use]
    pub fn bindings(&self) -> &ServerBindings {
        &self.bindings
    }

    /// Address of the upstream metrics backend, if configured.
    #[must_use]
    pub fn prometheus(&self) -> Option<&str> {
        self.prometheus.as_deref()
    }

    /// The compiled metric registry.
    #[must_use]
    pub fn registry(&self) -> &MetricRegistry {
        &self.registry
    }
}
