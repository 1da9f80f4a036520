//! Scenario templates and the transcripts filled from them.

use crate::category::Category;

/// A parametrized transcript pattern with its triage category.
///
/// Templates are defined statically and never mutated. `text_pattern` may
/// contain the placeholders `{name}`, `{drug}` and `{doctor}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScenarioTemplate {
    pub text_pattern: &'static str,
    pub category: Category,
    /// Phrases the UI highlights to explain the triage decision.
    pub keywords: &'static [&'static str],
}

/// A template after its placeholders have been filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    pub text: String,
    pub patient_name: String,
    pub category: Category,
    pub keywords: Vec<String>,
}
