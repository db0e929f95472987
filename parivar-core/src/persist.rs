//! Family archive persistence.
//!
//! Serializes the complete family vault to human-readable JSON with a
//! version stamp for compatibility checking. The graph engine itself
//! performs no IO; archiving is a boundary concern layered on top.

use crate::family::Family;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

/// Errors from archive operations.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },
}

/// Current archive format version.
const ARCHIVE_VERSION: u32 = 1;

/// A saved family vault with everything needed to resume a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FamilyArchive {
    /// Archive format version for compatibility checking.
    pub version: u32,

    /// When the archive was created (seconds since the epoch).
    pub saved_at: String,

    /// The complete family state.
    pub family: Family,

    /// Summary metadata, peekable without touching the lineage.
    pub metadata: ArchiveMetadata,
}

/// Metadata about an archive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveMetadata {
    pub family_name: String,
    pub member_count: usize,
    pub deceased_count: usize,
    pub tradition_count: usize,
    #[serde(default)]
    pub saved_at: String,
}

impl FamilyArchive {
    /// Create a new archive from family state.
    pub fn new(family: Family) -> Self {
        let saved_at = timestamp_now();
        let metadata = ArchiveMetadata {
            family_name: family.name.clone(),
            member_count: family.lineage().len(),
            deceased_count: family.lineage().deceased_members().len(),
            tradition_count: family.traditions().len(),
            saved_at: saved_at.clone(),
        };

        Self {
            version: ARCHIVE_VERSION,
            saved_at,
            family,
            metadata,
        }
    }

    /// Save to a JSON file.
    pub async fn save_json(&self, path: impl AsRef<Path>) -> Result<(), PersistError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).await?;
        Ok(())
    }

    /// Load from a JSON file.
    pub async fn load_json(path: impl AsRef<Path>) -> Result<Self, PersistError> {
        let content = fs::read_to_string(path).await?;
        let archive: Self = serde_json::from_str(&content)?;

        if archive.version != ARCHIVE_VERSION {
            return Err(PersistError::VersionMismatch {
                expected: ARCHIVE_VERSION,
                found: archive.version,
            });
        }

        Ok(archive)
    }

    /// Read an archive's metadata without loading the full state.
    pub async fn peek_metadata(path: impl AsRef<Path>) -> Result<ArchiveMetadata, PersistError> {
        let content = fs::read_to_string(path).await?;

        #[derive(Deserialize)]
        struct Partial {
            version: u32,
            metadata: ArchiveMetadata,
        }

        let partial: Partial = serde_json::from_str(&content)?;

        if partial.version != ARCHIVE_VERSION {
            return Err(PersistError::VersionMismatch {
                expected: ARCHIVE_VERSION,
                found: partial.version,
            });
        }

        Ok(partial.metadata)
    }

    /// Unwrap the archived family.
    pub fn into_family(self) -> Family {
        self.family
    }
}

/// Create an archive file name from a sanitized family name and a
/// timestamp.
pub fn archive_path(base_dir: impl AsRef<Path>, family_name: &str) -> PathBuf {
    let sanitized = family_name
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect::<String>();
    let timestamp = timestamp_now();
    base_dir
        .as_ref()
        .join(format!("{sanitized}_{timestamp}.json"))
}

/// Get the current timestamp as seconds since the epoch.
fn timestamp_now() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();

    format!("{}", now.as_secs())
}
