//! Fixture verifier.
//!
//! Verification runs in two phases:
//!
//! 1. **Structural** — the JSON form of the record sequence is validated
//!    against [`artifact_schema`] using the `jsonschema` crate.
//! 2. **Semantic** — each record is checked against the triage table and the
//!    sequence-level invariants (unique ids, non-decreasing receive times).
//!
//! All failures are collected before returning so a broken artifact is
//! reported in one pass.

use std::collections::HashSet;

use chrono::NaiveTime;
use serde_json::Value;
use tracing::{debug, warn};

use vmtriage_contracts::{
    error::FixtureResult,
    record::{VoicemailRecord, TIME_RECEIVED_FORMAT},
    report::{FixtureFailure, FixtureReport},
    triage::Intent,
};
use vmtriage_rules::table::{row_for_intent, CONFIDENCE_CEILING, CONFIDENCE_FLOOR};

use crate::schema::artifact_schema;

/// Checks record sequences against the artifact schema and triage rules.
pub struct FixtureVerifier {
    schema: Value,
}

impl FixtureVerifier {
    /// Create a verifier over the built-in artifact schema.
    pub fn new() -> Self {
        Self {
            schema: artifact_schema(),
        }
    }

    /// Verify an in-memory record sequence.
    pub fn verify(&self, records: &[VoicemailRecord]) -> FixtureResult<FixtureReport> {
        let value = serde_json::to_value(records)?;
        let mut failures = self.structural(&value);
        failures.extend(semantic(records));
        Ok(finish(failures))
    }

    /// Verify a decoded JSON document, e.g. an artifact read from disk.
    ///
    /// If the document does not decode as records, the decode failure is
    /// reported alongside any schema violations and semantic rules are
    /// skipped.
    pub fn verify_value(&self, value: &Value) -> FixtureReport {
        let mut failures = self.structural(value);

        match serde_json::from_value::<Vec<VoicemailRecord>>(value.clone()) {
            Ok(records) => failures.extend(semantic(&records)),
            Err(e) => failures.push(failure("decode", format!("artifact does not decode as records: {e}"))),
        }

        finish(failures)
    }

    // ── Phase 1: JSON Schema structural validation ────────────────────────────

    fn structural(&self, value: &Value) -> Vec<FixtureFailure> {
        match jsonschema::validator_for(&self.schema) {
            Ok(validator) => validator
                .iter_errors(value)
                .map(|error| {
                    let message =
                        format!("JSON Schema violation at {}: {}", error.instance_path, error);
                    warn!(%message, "structural validation failure");
                    failure("json-schema", message)
                })
                .collect(),
            Err(e) => vec![failure("json-schema", format!("invalid JSON Schema document: {e}"))],
        }
    }
}

impl Default for FixtureVerifier {
    fn default() -> Self {
        Self::new()
    }
}

// ── Phase 2: semantic rules ───────────────────────────────────────────────────

fn semantic(records: &[VoicemailRecord]) -> Vec<FixtureFailure> {
    let mut failures = Vec::new();
    let mut seen_ids = HashSet::with_capacity(records.len());
    let mut previous: Option<(NaiveTime, &str)> = None;

    for record in records {
        debug!(id = %record.id, "checking record");

        if !seen_ids.insert(record.id.as_str()) {
            failures.push(failure("unique-id", format!("id '{}' appears more than once", record.id)));
        }

        if !is_well_formed_id(&record.id) {
            failures.push(failure(
                "id-format",
                format!("id '{}' is not 'vm_' followed by six lowercase hex digits", record.id),
            ));
        }

        let triage = &record.triage;
        let row = row_for_intent(triage.intent);
        if triage.urgency != row.urgency
            || triage.summary != row.summary
            || triage.suggested_actions != row.suggested_actions
        {
            failures.push(failure(
                "triage-row",
                format!(
                    "record '{}' does not match the '{}' triage row",
                    record.id,
                    triage.intent.as_str()
                ),
            ));
        }

        let score = triage.confidence_score;
        let confidence_ok = if triage.intent == Intent::Emergency {
            score == CONFIDENCE_CEILING
        } else {
            (CONFIDENCE_FLOOR..=CONFIDENCE_CEILING).contains(&score)
        };
        if !confidence_ok {
            failures.push(failure(
                "confidence-range",
                format!("record '{}' has confidence {} for intent '{}'", record.id, score, triage.intent.as_str()),
            ));
        }

        match NaiveTime::parse_from_str(&record.time_received, TIME_RECEIVED_FORMAT) {
            Ok(time) => {
                if let Some((prev_time, prev_id)) = previous {
                    if time < prev_time {
                        failures.push(failure(
                            "time-monotonic",
                            format!(
                                "record '{}' at {} is earlier than '{}'",
                                record.id, record.time_received, prev_id
                            ),
                        ));
                    }
                }
                previous = Some((time, record.id.as_str()));
            }
            Err(e) => failures.push(failure(
                "time-format",
                format!("record '{}' has unparseable time '{}': {e}", record.id, record.time_received),
            )),
        }
    }

    failures
}

fn is_well_formed_id(id: &str) -> bool {
    id.strip_prefix("vm_").is_some_and(|hex| {
        hex.len() == 6 && hex.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
    })
}

fn failure(rule_id: &str, message: String) -> FixtureFailure {
    FixtureFailure {
        rule_id: rule_id.to_string(),
        message,
    }
}

fn finish(failures: Vec<FixtureFailure>) -> FixtureReport {
    let report = FixtureReport::from_failures(failures);
    if !report.passed {
        warn!(failures = report.failures.len(), "fixture verification failed");
    }
    report
}

// ── Tests ────────────────────────────────────────────────────────────────────
