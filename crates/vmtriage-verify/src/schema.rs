//! The JSON Schema every artifact must satisfy.

use serde_json::{json, Value};

/// Schema for the top-level artifact: an array of voicemail records.
pub fn artifact_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "type": "array",
        "items": {
            "type": "object",
            "additionalProperties": false,
            "required": [
                "id",
                "patientName",
                "timeReceived",
                "fullTranscript",
                "summary",
                "intent",
                "urgency",
                "suggestedActions",
                "confidenceScore",
                "detectedKeywords"
            ],
            "properties": {
                "id": { "type": "string", "pattern": "^vm_[0-9a-f]{6}$" },
                "patientName": { "type": "string", "minLength": 1 },
                "timeReceived": { "type": "string" },
                "fullTranscript": { "type": "string", "minLength": 1 },
                "summary": { "type": "string" },
                "intent": {
                    "enum": [
                        "unknown",
                        "emergency",
                        "prescription",
                        "scheduling",
                        "medical_records",
                        "complaint"
                    ]
                },
                "urgency": { "enum": ["low", "medium", "high", "critical"] },
                "suggestedActions": {
                    "type": "array",
                    "items": { "type": "string" },
                    "minItems": 1
                },
                "confidenceScore": { "type": "number", "minimum": 0, "maximum": 1 },
                "detectedKeywords": {
                    "type": "array",
                    "items": { "type": "string" }
                }
            }
        }
    })
}
