//! Fixture verification report types.

use serde::{Deserialize, Serialize};

/// The result of checking a record sequence against every fixture rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureReport {
    /// True only if every rule passed.
    pub passed: bool,
    /// All failures collected during the run. Empty on pass.
    pub failures: Vec<FixtureFailure>,
}

impl FixtureReport {
    /// Build a report from collected failures.
    pub fn from_failures(failures: Vec<FixtureFailure>) -> Self {
        Self {
            passed: failures.is_empty(),
            failures,
        }
    }

    /// Join every failure into a single line, e.g. for an error message.
    pub fn summary(&self) -> String {
        self.failures
            .iter()
            .map(|f| format!("[{}] {}", f.rule_id, f.message))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// A single rule failure within a `FixtureReport`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureFailure {
    /// Identifier of the rule that failed, e.g. `"unique-id"`.
    pub rule_id: String,
    pub message: String,
}
