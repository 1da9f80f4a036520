//! Fixed vocabularies used to fill template placeholders.
//!
//! All names are fictional. Nothing here identifies a real patient or
//! clinician.

/// Caller names. Some templates never mention the name, but every record
/// still carries one as `patientName`.
pub const PATIENTS: &[&str] = &[
    "Sarah Jones",
    "John Smith",
    "Michael Wong",
    "Emma Davis",
    "David Miller",
    "Unknown Caller",
    "Mrs. Higgins",
];

pub const DRUGS: &[&str] = &["Perindopril", "Amoxicillin", "Panadol", "Oxycodone", "Metformin"];

pub const CLINICIANS: &[&str] = &["Dr. Kelly", "Dr. Lee", "Dr. Chen", "the nurse"];
