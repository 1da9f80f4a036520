//! # vmtriage-rules
//!
//! The rule-based triage classifier for vmtriage.
//!
//! ## Overview
//!
//! [`RuleClassifier`] implements the
//! [`Classifier`](vmtriage_core::traits::Classifier) trait. Each category maps
//! to exactly one immutable [`TriageRow`]; only the confidence score varies
//! between calls, and it is pinned to 0.99 for emergencies.
//!
//! ## Fallback
//!
//! `classify_label` accepts arbitrary strings. Anything that is not a known
//! category gets the `unknown` row: low urgency, a single `Callback` action.

pub mod classifier;
pub mod table;

pub use classifier::RuleClassifier;
pub use table::{row_for, row_for_intent, TriageRow};

// ── Tests ─────────────────────────────────────────────────────────────────────
