//! Uniform template selection and placeholder filling.

use rand::{seq::SliceRandom, RngCore};
use tracing::debug;

use vmtriage_contracts::scenario::{ScenarioTemplate, Transcript};
use vmtriage_core::traits::ScenarioSource;

use crate::templates::{DOCTOR_PLACEHOLDER, DRUG_PLACEHOLDER, NAME_PLACEHOLDER, TEMPLATES};
use crate::vocab::{CLINICIANS, DRUGS, PATIENTS};

/// Picks a template uniformly and fills it from the fixed vocabularies.
///
/// A name, a drug and a clinician are drawn for every record whether or not
/// the chosen template uses them, so the random stream consumed per record
/// does not depend on which template came up.
#[derive(Debug, Clone, Copy)]
pub struct TemplateSelector {
    templates: &'static [ScenarioTemplate],
}

impl TemplateSelector {
    /// A selector over the built-in templates.
    pub fn new() -> Self {
        Self { templates: TEMPLATES }
    }

    /// A selector over a caller-supplied template set. Must not be empty.
    pub fn with_templates(templates: &'static [ScenarioTemplate]) -> Option<Self> {
        if templates.is_empty() {
            None
        } else {
            Some(Self { templates })
        }
    }
}

impl Default for TemplateSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl ScenarioSource for TemplateSelector {
    fn draw(&self, rng: &mut dyn RngCore) -> Transcript {
        // `templates` is non-empty by construction; the vocabularies are
        // non-empty constants.
        let template = self.templates.choose(rng).unwrap_or(&TEMPLATES[0]);
        let name = PATIENTS.choose(rng).copied().unwrap_or_default();
        let drug = DRUGS.choose(rng).copied().unwrap_or_default();
        let doctor = CLINICIANS.choose(rng).copied().unwrap_or_default();

        debug!(category = %template.category, patient = name, "template selected");

        Transcript {
            text: fill(template.text_pattern, name, drug, doctor),
            patient_name: name.to_string(),
            category: template.category,
            keywords: template.keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// Substitute every placeholder occurrence in `pattern`.
pub fn fill(pattern: &str, name: &str, drug: &str, doctor: &str) -> String {
    pattern
        .replace(NAME_PLACEHOLDER, name)
        .replace(DRUG_PLACEHOLDER, drug)
        .replace(DOCTOR_PLACEHOLDER, doctor)
}
