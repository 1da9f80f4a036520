//! # vmtriage-verify
//!
//! Verification of generated voicemail fixtures.
//!
//! [`FixtureVerifier`] checks a record sequence, in memory or decoded from an
//! artifact, against a JSON Schema and the triage rules, and returns a
//! [`FixtureReport`](vmtriage_contracts::report::FixtureReport) listing every
//! failure.

pub mod engine;
pub mod schema;

pub use engine::FixtureVerifier;
pub use schema::artifact_schema;
