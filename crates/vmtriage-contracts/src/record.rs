//! The output entity written to the fixture artifact.

use serde::{Deserialize, Serialize};

use crate::triage::TriageResult;

/// `chrono` format string for [`VoicemailRecord::time_received`].
pub const TIME_RECEIVED_FORMAT: &str = "%I:%M %p";

/// One synthetic voicemail: transcript, metadata and its triage result.
///
/// The triage fields are flattened into the record so the serialized object
/// carries exactly: `id`, `patientName`, `timeReceived`, `fullTranscript`,
/// `summary`, `intent`, `urgency`, `suggestedActions`, `confidenceScore`,
/// `detectedKeywords`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoicemailRecord {
    /// `vm_` followed by six lowercase hex characters. Unique within a run.
    pub id: String,
    pub patient_name: String,
    /// Simulated receive time, e.g. `"08:15 AM"`.
    pub time_received: String,
    pub full_transcript: String,
    #[serde(flatten)]
    pub triage: TriageResult,
    pub detected_keywords: Vec<String>,
}
