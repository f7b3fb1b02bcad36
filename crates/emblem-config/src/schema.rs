//! Configuration document schema.
//!
//! These types mirror the YAML document loaded at startup. Parsing is strict
//! about structural shape (missing required fields and wrong types are
//! errors) but permissive otherwise: optional fields take their empty value
//! when absent, and unrecognized keys are ignored.

use serde::Deserialize;

/// Root of the configuration document.
///
/// # Example
///
/// ```
/// use emblem_config::Configuration;
///
/// let yaml = r"
/// prometheus: http://prometheus:9090
/// metrics:
///   - name: uptime
///     query: up
/// ";
///
/// let config: Configuration = serde_yaml::from_str(yaml).unwrap();
/// assert_eq!(config.metrics.len(), 1);
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Configuration {
    /// Address of the upstream metrics backend.
    #[serde(default)]
    pub prometheus: Option<String>,

    /// Declared metrics, in document order.
    pub metrics: Vec<MetricDefinition>,
}

/// One named metric projection: how to query it and how to render it.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MetricDefinition {
    /// Registry key; incoming requests resolve against this name.
    pub name: String,

    /// Query expression, passed verbatim to the upstream backend.
    pub query: String,

    /// Badge label shown instead of the metric name.
    #[serde(default)]
    pub label: Option<String>,

    /// Text prepended to the rendered value.
    #[serde(default)]
    pub prefix: Option<String>,

    /// Text appended to the rendered value.
    #[serde(default)]
    pub suffix: Option<String>,

    /// Threshold bands, in document order; consumers select the first
    /// matching band.
    #[serde(default)]
    pub colors: Vec<ColorRule>,
}

/// A threshold band mapping a numeric range to a display color.
///
/// Bounds are stored faithfully; range semantics belong to the consumer.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ColorRule {
    /// Lower bound of the band.
    pub min: f64,

    /// Upper bound of the band.
    pub max: f64,

    /// Named or hex color for values falling in the band.
    #[serde(default)]
    pub color: Option<String>,

    /// Replacement text for the rendered value within the band.
    #[serde(default, rename = "valueOverride")]
    pub value_override: Option<String>,
}
