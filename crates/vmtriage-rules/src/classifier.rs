//! Rule-based triage classifier.
//!
//! `RuleClassifier` implements the `Classifier` trait from vmtriage-core by
//! reading the static table in [`crate::table`]. It never inspects transcript
//! text; the category alone decides the outcome.

use rand::{Rng, RngCore};
use tracing::debug;

use vmtriage_contracts::{category::Category, triage::TriageResult};
use vmtriage_core::traits::Classifier;

use crate::table::{row_for, Confidence, TriageRow, CONFIDENCE_CEILING, CONFIDENCE_FLOOR};

/// The table-driven classifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleClassifier;

impl RuleClassifier {
    /// Create a classifier over the built-in triage table.
    pub fn new() -> Self {
        Self
    }

    /// Classify a raw category label.
    ///
    /// Labels that are not a known category take the `unknown` row. This is
    /// the documented default path, not an error.
    pub fn classify_label(&self, label: &str, rng: &mut dyn RngCore) -> TriageResult {
        let category = Category::from_label(label);
        if category == Category::Unknown && !label.trim().eq_ignore_ascii_case("unknown") {
            debug!(label, "unrecognized category label, using fallback row");
        }
        self.classify(category, rng)
    }
}

impl Classifier for RuleClassifier {
    fn classify(&self, category: Category, rng: &mut dyn RngCore) -> TriageResult {
        let row = row_for(category);
        let confidence_score = confidence_for(row, rng);

        debug!(
            category = %category,
            intent = row.intent.as_str(),
            confidence_score,
            "classified"
        );

        TriageResult {
            summary: row.summary.to_string(),
            intent: row.intent,
            urgency: row.urgency,
            suggested_actions: row.suggested_actions.iter().map(|a| a.to_string()).collect(),
            confidence_score,
        }
    }
}

/// Resolve a row's confidence. Pinned rows consume no randomness.
fn confidence_for(row: &TriageRow, rng: &mut dyn RngCore) -> f64 {
    match row.confidence {
        Confidence::Pinned(value) => value,
        Confidence::Sampled => {
            let raw: f64 = rng.gen_range(CONFIDENCE_FLOOR..=CONFIDENCE_CEILING);
            (raw * 100.0).round() / 100.0
        }
    }
}
