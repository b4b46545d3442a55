//! Durable baseline storage
//!
//! The baseline lives in a single pretty-printed JSON file so operators can
//! inspect or diff it out of band. There is no schema version field; format
//! changes are breaking.

use crate::baseline::Snapshot;
use crate::error::StoreError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads and writes the on-disk baseline.
///
/// The store is a plain value; the engine re-reads from disk at the start of
/// every check, so the file is the single source of truth and a process
/// restart can never serve a stale in-memory copy.
#[derive(Debug, Clone)]
pub struct BaselineStore {
    path: PathBuf,
}

impl BaselineStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the baseline file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist a snapshot, fully replacing any prior baseline.
    ///
    /// Writes to a temporary file then renames over the final path, so a
    /// concurrent reader never observes a partially written baseline. A
    /// crash mid-write can orphan the temp file; not retried.
    pub fn save(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let serialized =
            serde_json::to_vec_pretty(snapshot).map_err(|source| StoreError::Malformed {
                path: self.path.clone(),
                source,
            })?;

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, &serialized).map_err(|source| StoreError::Io {
            path: temp_path.clone(),
            source,
        })?;

        fs::rename(&temp_path, &self.path).map_err(|source| {
            let _ = fs::remove_file(&temp_path);
            StoreError::Io {
                path: self.path.clone(),
                source,
            }
        })?;

        debug!(path = ?self.path, entries = snapshot.len(), "baseline saved");
        Ok(())
    }

    /// Load the persisted snapshot.
    ///
    /// Returns `Ok(None)` when the baseline file does not exist — the
    /// expected state before the first `init` — which callers must keep
    /// distinct from an I/O failure.
    pub fn load(&self) -> Result<Option<Snapshot>, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let snapshot =
            serde_json::from_slice(&bytes).map_err(|source| StoreError::Malformed {
                path: self.path.clone(),
                source,
            })?;
        Ok(Some(snapshot))
    }
}
