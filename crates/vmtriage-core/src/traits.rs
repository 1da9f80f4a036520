//! Trait seams of the generation pipeline.
//!
//! - `ScenarioSource` — produces a filled transcript and its category
//! - `Classifier`     — maps a category to a triage result
//!
//! Both receive the random source explicitly so a seeded generator produces
//! the same sequence on every run.

use rand::RngCore;

use vmtriage_contracts::{
    category::Category,
    scenario::Transcript,
    triage::TriageResult,
};

/// Produces one transcript per call.
pub trait ScenarioSource: Send + Sync {
    /// Pick a template and fill its placeholders.
    fn draw(&self, rng: &mut dyn RngCore) -> Transcript;
}

/// Assigns a triage result to a category.
///
/// Implementations must be total: every category yields a result, and the
/// only randomness allowed is drawn from `rng`.
pub trait Classifier: Send + Sync {
    fn classify(&self, category: Category, rng: &mut dyn RngCore) -> TriageResult;
}
