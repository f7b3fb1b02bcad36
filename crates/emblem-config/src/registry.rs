//! Compiled metric registry.
//!
//! Request handlers resolve incoming metric names against this registry in
//! O(1). It is built once during startup and exposes no mutation API: after
//! compilation any number of concurrent readers may share it without
//! synchronization.

use std::collections::HashMap;

use crate::MetricDefinition;

/// Name-indexed, read-only mapping of metric definitions.
///
/// Every key equals the `name` field of its definition.
///
/// # Example
///
/// ```
/// use emblem_config::{MetricDefinition, MetricRegistry};
///
/// let registry = MetricRegistry::compile(vec![MetricDefinition {
///     name: "uptime".to_string(),
///     query: "up".to_string(),
///     label: None,
///     prefix: None,
///     suffix: None,
///     colors: Vec::new(),
/// }]);
///
/// assert!(registry.get("uptime").is_some());
/// assert!(registry.get("unknown").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricRegistry {
    metrics: HashMap<String, MetricDefinition>,
}

impl MetricRegistry {
    /// Compile an ordered sequence of definitions into a registry.
    ///
    /// Definitions are indexed by name in sequence order. If two definitions
    /// share a name, the later one overwrites the earlier one in the result;
    /// duplicate names are not an error. No validation of queries or color
    /// rules happens here, this is purely a structural reindexing step.
    #[must_use]
    pub fn compile(definitions: Vec<MetricDefinition>) -> Self {
        let mut metrics = HashMap::with_capacity(definitions.len());
        for definition in definitions {
            metrics.insert(definition.name.clone(), definition);
        }
        Self { metrics }
    }

    /// Look up a metric definition by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&MetricDefinition> {
        self.metrics.get(name)
    }

    /// Whether a metric with the given name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.metrics.contains_key(name)
    }

    /// Number of registered metrics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    /// Iterate over registered metric names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.metrics.keys().map(String::as_str)
    }
}
