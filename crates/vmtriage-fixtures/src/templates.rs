//! The voicemail scenarios.
//!
//! One template per category. Keywords are the phrases the triage UI
//! highlights to explain why a message was tagged the way it was.

use vmtriage_contracts::{category::Category, scenario::ScenarioTemplate};

pub const NAME_PLACEHOLDER: &str = "{name}";
pub const DRUG_PLACEHOLDER: &str = "{drug}";
pub const DOCTOR_PLACEHOLDER: &str = "{doctor}";

pub const TEMPLATES: &[ScenarioTemplate] = &[
    ScenarioTemplate {
        text_pattern: "Hi, this is {name}. My husband woke up and his chest feels really heavy... \
                       he is sweating and looks pale. Please call back immediately.",
        category: Category::Emergency,
        keywords: &["chest heavy", "sweating", "pale", "call back immediately"],
    },
    ScenarioTemplate {
        text_pattern: "Hello, it's {name}. I'm running low on my {drug}. Can {doctor} send a \
                       script to the chemist? I'll pick it up Thursday.",
        category: Category::Script,
        keywords: &["running low", "script", "chemist"],
    },
    ScenarioTemplate {
        text_pattern: "Hi, {name} here. I need to cancel my appointment for tomorrow morning. \
                       I've been called into work. Sorry!",
        category: Category::Admin,
        keywords: &["cancel", "appointment", "tomorrow morning"],
    },
    ScenarioTemplate {
        text_pattern: "Uhh, hi. I missed a call from this number? Not sure who called me. Bye.",
        category: Category::Unknown,
        keywords: &["missed a call", "who called me"],
    },
    ScenarioTemplate {
        text_pattern: "This is {name}. I'm still waiting for my blood test results from last \
                       week. Nobody has called me back and I'm getting worried.",
        category: Category::Results,
        keywords: &["blood test results", "waiting", "worried"],
    },
    ScenarioTemplate {
        text_pattern: "I need to speak to {doctor} NOW. The pharmacy refused to dispense my \
                       {drug} and said I need a new authority. This is ridiculous.",
        category: Category::Complaint,
        keywords: &["speak to doctor NOW", "pharmacy refused", "authority"],
    },
];

/// The template for `category`.
pub fn template_for(category: Category) -> Option<&'static ScenarioTemplate> {
    TEMPLATES.iter().find(|t| t.category == category)
}
