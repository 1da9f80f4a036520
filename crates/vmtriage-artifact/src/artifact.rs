//! Reading and writing the fixture artifact.
//!
//! The artifact is a pretty-printed JSON array (two-space indent) of
//! `VoicemailRecord`s. It is written once per run and overwrites whatever was
//! at the path before.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use vmtriage_contracts::{
    error::{FixtureError, FixtureResult},
    record::VoicemailRecord,
};

use crate::digest::digest_bytes;

/// What was written, for logging and for pinning the fixture downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactManifest {
    pub path: PathBuf,
    pub record_count: usize,
    /// SHA-256 (hex) of the bytes on disk.
    pub sha256: String,
    pub written_at: DateTime<Utc>,
}

/// Serialize `records` and write them to `path`, replacing any existing file.
///
/// # Errors
///
/// `FixtureError::Io` if the file cannot be written. There is no retry.
pub fn write_artifact(path: &Path, records: &[VoicemailRecord]) -> FixtureResult<ArtifactManifest> {
    let bytes = serde_json::to_vec_pretty(records)?;

    debug!(path = %path.display(), bytes = bytes.len(), "writing artifact");
    std::fs::write(path, &bytes).map_err(|e| io_error(path, e))?;

    let manifest = ArtifactManifest {
        path: path.to_path_buf(),
        record_count: records.len(),
        sha256: digest_bytes(&bytes),
        written_at: Utc::now(),
    };

    info!(
        path = %path.display(),
        records = manifest.record_count,
        sha256 = %manifest.sha256,
        "artifact written"
    );

    Ok(manifest)
}

/// Read an artifact back into records.
pub fn read_artifact(path: &Path) -> FixtureResult<Vec<VoicemailRecord>> {
    let bytes = std::fs::read(path).map_err(|e| io_error(path, e))?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Read an artifact as untyped JSON, for verifying files that may not decode.
pub fn read_artifact_value(path: &Path) -> FixtureResult<Value> {
    let bytes = std::fs::read(path).map_err(|e| io_error(path, e))?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Digest of the artifact currently on disk.
pub fn digest_file(path: &Path) -> FixtureResult<String> {
    let bytes = std::fs::read(path).map_err(|e| io_error(path, e))?;
    Ok(digest_bytes(&bytes))
}

fn io_error(path: &Path, e: std::io::Error) -> FixtureError {
    FixtureError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}
