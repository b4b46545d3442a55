//! Baseline snapshot model
//!
//! A snapshot maps each tracked file's relative path to its recorded hash,
//! size, and modification time. Two snapshots exist conceptually: the
//! persisted baseline and the ephemeral current state computed per check.

pub mod store;

pub use store::BaselineStore;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::UNIX_EPOCH;

/// One tracked file within a snapshot.
///
/// `last_modified` is informational only; the diff compares hashes, never
/// timestamps, since an mtime can be forged or reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Lowercase hex SHA-256 digest of the file's contents.
    pub hash: String,
    /// Size in bytes at the time the hash was computed.
    pub size: u64,
    /// Modification time as fractional seconds since the Unix epoch.
    pub last_modified: f64,
}

impl FileRecord {
    /// Build a record from a computed digest and the file's metadata.
    pub fn new(hash: String, metadata: &std::fs::Metadata) -> Self {
        let last_modified = metadata
            .modified()
            .ok()
            .and_then(|mtime| mtime.duration_since(UNIX_EPOCH).ok())
            .map(|d| d.as_secs_f64())
            .unwrap_or(0.0);
        Self {
            hash,
            size: metadata.len(),
            last_modified,
        }
    }
}

/// Full state of a directory tree at one point in time, keyed by normalized
/// relative path.
///
/// The ordered map gives last-write-wins key uniqueness and a deterministic
/// serialization order, so rebuilding a baseline over an unchanged tree
/// produces byte-identical output.
pub type Snapshot = BTreeMap<String, FileRecord>;
