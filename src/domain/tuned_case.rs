//! Tuned test-case record.

use std::collections::BTreeMap;

use serde_yaml::Mapping;

use super::{CaseName, ParamValue};

/// One named tuned training case: an environment, an algorithm, and the
/// metric thresholds that judge and terminate a run.
///
/// Records are immutable after load; the harness reads them, never writes.
#[derive(Debug, Clone, PartialEq)]
pub struct TunedCase {
    /// Unique case name, the document's single top-level key.
    pub name: CaseName,
    /// Simulation environment id (e.g. `PongDeterministic-v4`).
    pub env: String,
    /// Training algorithm id (e.g. `A3C`).
    pub run: String,
    /// Metric thresholds that must all be met or exceeded for the case to
    /// pass. Empty means the case has no pass judgment.
    pub pass_criteria: BTreeMap<String, f64>,
    /// Metric thresholds that terminate training once any one is reached.
    /// Always non-empty.
    pub stop: BTreeMap<String, f64>,
    /// Execution backends the case is valid for; empty means all.
    pub frameworks: Vec<String>,
    /// Open algorithm/model hyperparameters.
    pub config: BTreeMap<String, ParamValue>,
    /// Unrecognized keys from the case body, preserved verbatim and in
    /// source order.
    pub extensions: Mapping,
}

impl TunedCase {
    /// Whether the case may run on the given execution backend.
    pub fn supports_framework(&self, framework: &str) -> bool {
        self.frameworks.is_empty() || self.frameworks.iter().any(|f| f == framework)
    }

    /// True when every pass criterion is met or exceeded by `metrics`.
    /// A criterion whose metric is absent counts as unmet.
    pub fn passes(&self, metrics: &BTreeMap<String, f64>) -> bool {
        self.pass_criteria
            .iter()
            .all(|(metric, threshold)| metrics.get(metric).is_some_and(|value| value >= threshold))
    }

    /// True once any stop threshold has been reached.
    pub fn should_stop(&self, metrics: &BTreeMap<String, f64>) -> bool {
        self.stop
            .iter()
            .any(|(metric, threshold)| metrics.get(metric).is_some_and(|value| value >= threshold))
    }
}
