//! The category → triage lookup table.
//!
//! One immutable row per category. `row_for` is an exhaustive match, so
//! adding a category without a row is a compile error. `Unknown` is the
//! fallback row for anything that does not parse as a known category.

use vmtriage_contracts::{
    category::Category,
    triage::{Intent, Urgency},
};

/// Lower bound of a sampled confidence score.
pub const CONFIDENCE_FLOOR: f64 = 0.70;

/// Upper bound of a sampled confidence score, and the pinned value.
pub const CONFIDENCE_CEILING: f64 = 0.99;

/// How a row's confidence score is produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Confidence {
    /// Always this value.
    Pinned(f64),
    /// Uniform in `[CONFIDENCE_FLOOR, CONFIDENCE_CEILING]`, two decimals.
    Sampled,
}

/// The fixed triage outcome for one category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriageRow {
    pub category: Category,
    pub urgency: Urgency,
    pub intent: Intent,
    pub suggested_actions: &'static [&'static str],
    pub summary: &'static str,
    pub confidence: Confidence,
}

const EMERGENCY: TriageRow = TriageRow {
    category: Category::Emergency,
    urgency: Urgency::Critical,
    intent: Intent::Emergency,
    suggested_actions: &["CALL NOW", "Alert On-Call Doctor"],
    summary: "Reports symptoms of cardiac distress (chest heaviness, sweating).",
    confidence: Confidence::Pinned(CONFIDENCE_CEILING),
};

const SCRIPT: TriageRow = TriageRow {
    category: Category::Script,
    urgency: Urgency::Low,
    intent: Intent::Prescription,
    suggested_actions: &["Approve Script", "SMS 'Ready'"],
    summary: "Requesting repeat prescription.",
    confidence: Confidence::Sampled,
};

const ADMIN: TriageRow = TriageRow {
    category: Category::Admin,
    urgency: Urgency::Low,
    intent: Intent::Scheduling,
    suggested_actions: &["Remove from Calendar", "Send Confirmation"],
    summary: "Cancellation request for upcoming appointment.",
    confidence: Confidence::Sampled,
};

const RESULTS: TriageRow = TriageRow {
    category: Category::Results,
    urgency: Urgency::Medium,
    intent: Intent::MedicalRecords,
    suggested_actions: &["Check Pathology Inbox", "Task Nurse"],
    summary: "Patient chasing blood test results.",
    confidence: Confidence::Sampled,
};

const COMPLAINT: TriageRow = TriageRow {
    category: Category::Complaint,
    urgency: Urgency::High,
    intent: Intent::Complaint,
    suggested_actions: &["Review File", "Call Patient Calmly"],
    summary: "Dispute regarding medication authority at pharmacy.",
    confidence: Confidence::Sampled,
};

const FALLBACK: TriageRow = TriageRow {
    category: Category::Unknown,
    urgency: Urgency::Low,
    intent: Intent::Unknown,
    suggested_actions: &["Callback"],
    summary: "Message received.",
    confidence: Confidence::Sampled,
};

/// Look up the row for `category`.
pub fn row_for(category: Category) -> &'static TriageRow {
    match category {
        Category::Emergency => &EMERGENCY,
        Category::Script => &SCRIPT,
        Category::Admin => &ADMIN,
        Category::Results => &RESULTS,
        Category::Complaint => &COMPLAINT,
        Category::Unknown => &FALLBACK,
    }
}

/// Reverse lookup used when only a serialized record is available.
///
/// Intents are unique per row, so this is the inverse of `row_for`.
pub fn row_for_intent(intent: Intent) -> &'static TriageRow {
    Category::ALL
        .into_iter()
        .map(row_for)
        .find(|row| row.intent == intent)
        .unwrap_or(&FALLBACK)
}
