//! # vmtriage-core
//!
//! The sequential generation runtime for vmtriage.
//!
//! This crate provides:
//! - The two pipeline traits (`ScenarioSource`, `Classifier`)
//! - The `SimulatedClock` that stamps receive times
//! - `GenerationConfig`, loaded from TOML
//! - The `Generator` that wires them together, one record at a time
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rand::{rngs::StdRng, SeedableRng};
//! use vmtriage_core::{Generator, GenerationConfig};
//!
//! let config = GenerationConfig::default();
//! let generator = Generator::new(Box::new(source), Box::new(classifier), &config)?;
//! let records = generator.generate(config.count, &mut StdRng::seed_from_u64(7))?;
//! ```

pub mod clock;
pub mod config;
pub mod generator;
pub mod traits;

pub use config::GenerationConfig;
pub use generator::Generator;

// ── Tests ─────────────────────────────────────────────────────────────────────
