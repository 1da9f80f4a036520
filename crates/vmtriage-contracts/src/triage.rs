//! Triage result types.
//!
//! A `TriageResult` is the structured bundle the classifier attaches to a
//! transcript. Field names serialize in camelCase and enum values in
//! snake_case so the JSON matches what the triage UI consumes.

use serde::{Deserialize, Serialize};

/// How quickly a message needs a human response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Low,
    Medium,
    High,
    Critical,
}

/// What the caller is trying to achieve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Unknown,
    Emergency,
    Prescription,
    Scheduling,
    MedicalRecords,
    Complaint,
}

impl Intent {
    /// The snake_case label used in the serialized record.
    pub fn as_str(self) -> &'static str {
        match self {
            Intent::Unknown => "unknown",
            Intent::Emergency => "emergency",
            Intent::Prescription => "prescription",
            Intent::Scheduling => "scheduling",
            Intent::MedicalRecords => "medical_records",
            Intent::Complaint => "complaint",
        }
    }
}

/// The classifier's verdict for one transcript.
///
/// Produced fresh by every classification call. Field order matches the
/// order the fields appear in the serialized voicemail record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriageResult {
    /// One-line description of the message for the inbox view.
    pub summary: String,
    pub intent: Intent,
    pub urgency: Urgency,
    /// Ordered list of actions offered to the receptionist.
    pub suggested_actions: Vec<String>,
    /// Classifier certainty in `[0, 1]`.
    pub confidence_score: f64,
}
