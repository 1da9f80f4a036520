//! # vmtriage-artifact
//!
//! The write-once fixture artifact.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use vmtriage_artifact::{read_artifact, write_artifact};
//!
//! let manifest = write_artifact(Path::new("mock_voicemails.json"), &records)?;
//! println!("sha256 {}", manifest.sha256);
//!
//! let back = read_artifact(&manifest.path)?;
//! assert_eq!(back, records);
//! ```

pub mod artifact;
pub mod digest;

pub use artifact::{digest_file, read_artifact, read_artifact_value, write_artifact, ArtifactManifest};
pub use digest::digest_bytes;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use vmtriage_contracts::{
        error::FixtureError,
        record::VoicemailRecord,
        triage::{Intent, TriageResult, Urgency},
    };

    use super::*;

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn make_record(id: &str, time: &str, confidence: f64) -> VoicemailRecord {
        VoicemailRecord {
            id: id.to_string(),
            patient_name: "Mrs. Higgins".to_string(),
            time_received: time.to_string(),
            full_transcript: "Hi, Mrs. Higgins here. I need to cancel my appointment.".to_string(),
            triage: TriageResult {
                summary: "Cancellation request for upcoming appointment.".to_string(),
                intent: Intent::Scheduling,
                urgency: Urgency::Low,
                suggested_actions: vec![
                    "Remove from Calendar".to_string(),
                    "Send Confirmation".to_string(),
                ],
                confidence_score: confidence,
            },
            detected_keywords: vec!["cancel".to_string(), "appointment".to_string()],
        }
    }

    fn records() -> Vec<VoicemailRecord> {
        vec![
            make_record("vm_0a1b2c", "08:12 AM", 0.7),
            make_record("vm_3d4e5f", "08:40 AM", 0.93),
            make_record("vm_abcdef", "09:25 AM", 0.99),
        ]
    }

    // ── Tests ─────────────────────────────────────────────────────────────────

    #[test]
    fn write_then_read_reproduces_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mock_voicemails.json");

        let manifest = write_artifact(&path, &records()).unwrap();
        assert_eq!(manifest.record_count, 3);
        assert_eq!(manifest.path, path);

        assert_eq!(read_artifact(&path).unwrap(), records());
    }

    #[test]
    fn generated_records_survive_write_and_read() {
        use rand::{rngs::StdRng, SeedableRng};
        use vmtriage_core::{GenerationConfig, Generator};
        use vmtriage_fixtures::TemplateSelector;
        use vmtriage_rules::RuleClassifier;

        let generator = Generator::new(
            Box::new(TemplateSelector::new()),
            Box::new(RuleClassifier::new()),
            &GenerationConfig::default(),
        )
        .unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("generated.json");

        for seed in 0..20 {
            let generated = generator.generate(200, &mut StdRng::seed_from_u64(seed)).unwrap();
            write_artifact(&path, &generated).unwrap();

            // Sampled confidence scores must come back bit-for-bit.
            assert_eq!(read_artifact(&path).unwrap(), generated, "seed {seed}");
        }
    }

    #[test]
    fn artifact_is_two_space_indented_json_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        write_artifact(&path, &records()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("[\n  {\n    \"id\": \"vm_0a1b2c\""), "{text}");
    }

    #[test]
    fn manifest_digest_matches_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");

        let manifest = write_artifact(&path, &records()).unwrap();
        assert_eq!(manifest.sha256.len(), 64);
        assert_eq!(manifest.sha256, digest_file(&path).unwrap());
    }

    #[test]
    fn rewrite_overwrites_previous_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");

        write_artifact(&path, &records()).unwrap();
        let second = write_artifact(&path, &records()[..1]).unwrap();

        assert_eq!(read_artifact(&path).unwrap().len(), 1);
        assert_eq!(second.sha256, digest_file(&path).unwrap());
    }

    #[test]
    fn digest_of_known_input() {
        assert_eq!(
            digest_bytes(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn write_into_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.json");

        match write_artifact(&path, &records()) {
            Err(FixtureError::Io { path: p, .. }) => assert!(p.contains("no-such-dir")),
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn read_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_artifact(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(FixtureError::Io { .. })));
    }

    #[test]
    fn read_garbage_is_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(read_artifact(&path), Err(FixtureError::Serialization { .. })));
        assert!(matches!(read_artifact_value(&path), Err(FixtureError::Serialization { .. })));
    }

    #[test]
    fn manifest_serializes_camel_case() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = write_artifact(&dir.path().join("out.json"), &records()).unwrap();

        let value = serde_json::to_value(&manifest).unwrap();
        assert_eq!(value["recordCount"], 3);
        assert!(value["writtenAt"].is_string());
    }
}
