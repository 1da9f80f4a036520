//! # vmtriage-contracts
//!
//! Shared types and error contracts for the vmtriage fixture generator.
//!
//! Every crate in the workspace imports from here. No business logic lives in
//! this crate, only data definitions and error types.

pub mod category;
pub mod error;
pub mod record;
pub mod report;
pub mod scenario;
pub mod triage;

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use category::Category;
    use error::FixtureError;
    use record::VoicemailRecord;
    use report::{FixtureFailure, FixtureReport};
    use triage::{Intent, TriageResult, Urgency};

    fn sample_record() -> VoicemailRecord {
        VoicemailRecord {
            id: "vm_1a2b3c".to_string(),
            patient_name: "Emma Davis".to_string(),
            time_received: "08:17 AM".to_string(),
            full_transcript: "This is Emma Davis. I'm still waiting for my blood test results."
                .to_string(),
            triage: TriageResult {
                summary: "Patient chasing blood test results.".to_string(),
                intent: Intent::MedicalRecords,
                urgency: Urgency::Medium,
                suggested_actions: vec![
                    "Check Pathology Inbox".to_string(),
                    "Task Nurse".to_string(),
                ],
                confidence_score: 0.83,
            },
            detected_keywords: vec!["blood test results".to_string(), "waiting".to_string()],
        }
    }

    // ── Category ─────────────────────────────────────────────────────────────

    #[test]
    fn category_labels_parse_back() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.as_str()), category);
        }
    }

    #[test]
    fn category_parse_ignores_case_and_whitespace() {
        assert_eq!(Category::from_label("  Emergency "), Category::Emergency);
        assert_eq!("SCRIPT".parse::<Category>().unwrap(), Category::Script);
    }

    #[test]
    fn unrecognized_category_falls_back_to_unknown() {
        assert_eq!(Category::from_label("zzz-unrecognized"), Category::Unknown);
        assert_eq!(Category::from_label(""), Category::Unknown);
    }

    // ── VoicemailRecord wire format ──────────────────────────────────────────

    #[test]
    fn record_serializes_with_flat_camel_case_fields() {
        let value = serde_json::to_value(sample_record()).unwrap();

        assert_eq!(
            value,
            json!({
                "id": "vm_1a2b3c",
                "patientName": "Emma Davis",
                "timeReceived": "08:17 AM",
                "fullTranscript": "This is Emma Davis. I'm still waiting for my blood test results.",
                "summary": "Patient chasing blood test results.",
                "intent": "medical_records",
                "urgency": "medium",
                "suggestedActions": ["Check Pathology Inbox", "Task Nurse"],
                "confidenceScore": 0.83,
                "detectedKeywords": ["blood test results", "waiting"]
            })
        );
    }

    #[test]
    fn record_field_order_matches_ui_layout() {
        let text = serde_json::to_string(&sample_record()).unwrap();
        let keys = [
            "\"id\"",
            "\"patientName\"",
            "\"timeReceived\"",
            "\"fullTranscript\"",
            "\"summary\"",
            "\"intent\"",
            "\"urgency\"",
            "\"suggestedActions\"",
            "\"confidenceScore\"",
            "\"detectedKeywords\"",
        ];
        let positions: Vec<usize> = keys.iter().map(|k| text.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "order: {text}");
    }

    #[test]
    fn record_round_trips() {
        let original = vec![sample_record(), sample_record()];
        let text = serde_json::to_string_pretty(&original).unwrap();
        let decoded: Vec<VoicemailRecord> = serde_json::from_str(&text).unwrap();
        assert_eq!(original, decoded);
    }

    // ── FixtureReport ────────────────────────────────────────────────────────

    #[test]
    fn report_passes_only_without_failures() {
        assert!(FixtureReport::from_failures(vec![]).passed);

        let report = FixtureReport::from_failures(vec![FixtureFailure {
            rule_id: "unique-id".to_string(),
            message: "id 'vm_000000' appears twice".to_string(),
        }]);
        assert!(!report.passed);
        assert_eq!(report.summary(), "[unique-id] id 'vm_000000' appears twice");
    }

    // ── FixtureError display messages ────────────────────────────────────────

    #[test]
    fn error_io_display() {
        let err = FixtureError::Io {
            path: "out/mock.json".to_string(),
            reason: "permission denied".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("out/mock.json"));
        assert!(msg.contains("permission denied"));
    }

    #[test]
    fn error_from_serde_json() {
        let json_err = serde_json::from_str::<VoicemailRecord>("{").unwrap_err();
        let err: FixtureError = json_err.into();
        assert!(err.to_string().contains("serialization error"));
    }

    #[test]
    fn error_config_display() {
        let err = FixtureError::ConfigError {
            reason: "min increment exceeds max".to_string(),
        };
        assert!(err.to_string().contains("configuration error"));
    }
}
