//! Error types for the fixture generation pipeline.
//!
//! All fallible operations in vmtriage return `FixtureResult<T>`. Variants
//! carry enough context for the CLI to print an actionable message.

use thiserror::Error;

/// The unified error type for vmtriage.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// The artifact could not be read from or written to disk.
    ///
    /// Fatal: there is no retry policy.
    #[error("artifact I/O failed for '{path}': {reason}")]
    Io { path: String, reason: String },

    /// A record sequence could not be encoded to or decoded from JSON.
    #[error("serialization error: {reason}")]
    Serialization { reason: String },

    /// A generation setting is missing or invalid.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// A record sequence violated one or more fixture invariants.
    #[error("fixture verification failed: {reason}")]
    VerificationFailed { reason: String },
}

impl From<serde_json::Error> for FixtureError {
    fn from(e: serde_json::Error) -> Self {
        FixtureError::Serialization {
            reason: e.to_string(),
        }
    }
}

/// Convenience alias used throughout the vmtriage crates.
pub type FixtureResult<T> = Result<T, FixtureError>;
