//! The sequential record generator.
//!
//! For each record the generator runs, in order:
//!
//!   ScenarioSource::draw → Classifier::classify → clock advance → id
//!
//! Records are independent apart from the simulated clock, the random source
//! and the set of ids already issued in this run.

use std::collections::HashSet;
use std::ops::RangeInclusive;

use chrono::NaiveTime;
use rand::{Rng, RngCore};
use tracing::{debug, info};

use vmtriage_contracts::{
    error::{FixtureError, FixtureResult},
    record::VoicemailRecord,
};

use crate::clock::SimulatedClock;
use crate::config::GenerationConfig;
use crate::traits::{Classifier, ScenarioSource};

/// Number of distinct ids: `vm_` plus six hex digits.
pub const ID_SPACE: usize = 1 << 24;

const ID_PREFIX: &str = "vm_";
const ID_HEX_LEN: usize = 6;

/// Drives one generation run.
///
/// The generator owns the scenario source and the classifier; the random
/// source is supplied per call so callers control reproducibility.
pub struct Generator {
    source: Box<dyn ScenarioSource>,
    classifier: Box<dyn Classifier>,
    anchor: NaiveTime,
    increments: RangeInclusive<u32>,
}

impl Generator {
    /// Build a generator from its components and a validated configuration.
    pub fn new(
        source: Box<dyn ScenarioSource>,
        classifier: Box<dyn Classifier>,
        config: &GenerationConfig,
    ) -> FixtureResult<Self> {
        config.validate()?;
        Ok(Self {
            source,
            classifier,
            anchor: config.anchor_time()?,
            increments: config.increment_range(),
        })
    }

    /// Generate exactly `count` records.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::ConfigError` if `count` exceeds [`ID_SPACE`].
    pub fn generate(
        &self,
        count: usize,
        rng: &mut dyn RngCore,
    ) -> FixtureResult<Vec<VoicemailRecord>> {
        if count > ID_SPACE {
            return Err(FixtureError::ConfigError {
                reason: format!("count {} exceeds the {} distinct record ids", count, ID_SPACE),
            });
        }

        info!(count, anchor = %self.anchor, "generating voicemail records");

        let mut clock = SimulatedClock::starting_at(self.anchor);
        let mut issued = HashSet::with_capacity(count);
        let mut records = Vec::with_capacity(count);

        for index in 0..count {
            let transcript = self.source.draw(rng);
            let triage = self.classifier.classify(transcript.category, rng);

            let minutes = rng.gen_range(self.increments.clone());
            clock.advance(minutes);

            let id = next_id(rng, &mut issued);

            debug!(
                index,
                id = %id,
                category = %transcript.category,
                urgency = ?triage.urgency,
                minutes,
                "record generated"
            );

            records.push(VoicemailRecord {
                id,
                patient_name: transcript.patient_name,
                time_received: clock.stamp(),
                full_transcript: transcript.text,
                triage,
                detected_keywords: transcript.keywords,
            });
        }

        info!(
            count = records.len(),
            clock_saturated = clock.is_saturated(),
            "generation complete"
        );

        Ok(records)
    }
}

/// Draw a fresh `vm_xxxxxx` id, redrawing on collision with `issued`.
///
/// The hex digits come from a v4 UUID built from bytes of `rng`, so a seeded
/// source yields the same ids every run.
fn next_id(rng: &mut dyn RngCore, issued: &mut HashSet<String>) -> String {
    loop {
        let mut bytes = [0u8; 16];
        rng.fill_bytes(&mut bytes);
        let uuid = uuid::Builder::from_random_bytes(bytes).into_uuid();
        let hex = uuid.simple().to_string();
        let id = format!("{}{}", ID_PREFIX, &hex[..ID_HEX_LEN]);

        if issued.insert(id.clone()) {
            return id;
        }
        debug!(id = %id, "record id collision, redrawing");
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
