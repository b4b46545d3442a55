//! Integrity engine
//!
//! Orchestrates the walker and hasher into snapshots and compares them.
//! Two operations, no shared mutable state between them beyond the durable
//! baseline store: `build_baseline` replaces the stored baseline wholesale,
//! `check_integrity` re-reads it and diffs it against a fresh scan.

pub mod diff;

use crate::baseline::{BaselineStore, FileRecord, Snapshot};
use crate::config::ScanConfig;
use crate::error::EngineError;
use crate::report::ChangeReport;
use crate::scan::hasher;
use crate::scan::walker::Walker;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Result of a baseline build.
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    /// Number of files recorded in the new baseline.
    pub files_recorded: u64,
    /// Relative paths that could not be hashed and were omitted.
    pub unreadable: Vec<String>,
    /// Where the baseline was written.
    pub baseline_path: PathBuf,
}

/// A fresh scan of a tree: the snapshot plus the files that resisted it.
struct TreeScan {
    snapshot: Snapshot,
    unreadable: Vec<String>,
}

/// The baseline construction and integrity-comparison engine.
///
/// The store is an injected value, not process-global state; separate
/// engines over separate stores can run checks concurrently with no
/// coordination.
pub struct IntegrityEngine {
    store: BaselineStore,
    scan: ScanConfig,
}

impl IntegrityEngine {
    pub fn new(store: BaselineStore) -> Self {
        Self {
            store,
            scan: ScanConfig::default(),
        }
    }

    pub fn with_scan_config(store: BaselineStore, scan: ScanConfig) -> Self {
        Self { store, scan }
    }

    pub fn store(&self) -> &BaselineStore {
        &self.store
    }

    /// Scan the tree and create a new baseline, unconditionally replacing
    /// any prior one.
    ///
    /// Files that cannot be hashed are omitted from the baseline (an entry
    /// asserts verified content) and surfaced in the outcome. Fails only
    /// when the root itself cannot be traversed or the baseline cannot be
    /// written. The caller is responsible for validating that the root is
    /// an existing directory.
    pub fn build_baseline(&self, root: &Path) -> Result<BuildOutcome, EngineError> {
        info!(root = %root.display(), "building baseline");
        let scan = self.scan_tree(root)?;
        self.store.save(&scan.snapshot)?;
        info!(
            files = scan.snapshot.len(),
            skipped = scan.unreadable.len(),
            baseline = %self.store.path().display(),
            "baseline written"
        );
        Ok(BuildOutcome {
            files_recorded: scan.snapshot.len() as u64,
            unreadable: scan.unreadable,
            baseline_path: self.store.path().to_path_buf(),
        })
    }

    /// Compare the current tree state against the stored baseline.
    ///
    /// The baseline is loaded fresh from the store on every call. A missing
    /// baseline is the distinguished `BaselineMissing` condition, not a
    /// generic I/O failure, so callers can tell the user to initialize
    /// first.
    pub fn check_integrity(&self, root: &Path) -> Result<ChangeReport, EngineError> {
        let baseline = self
            .store
            .load()?
            .ok_or_else(|| EngineError::BaselineMissing(self.store.path().to_path_buf()))?;

        info!(root = %root.display(), baseline_entries = baseline.len(), "checking integrity");
        let scan = self.scan_tree(root)?;
        let report = diff::classify(&baseline, &scan.snapshot, scan.unreadable);
        info!(
            added = report.added.len(),
            modified = report.modified.len(),
            deleted = report.deleted.len(),
            unreadable = report.unreadable.len(),
            unchanged = report.unchanged_count,
            "integrity check complete"
        );
        Ok(report)
    }

    /// Enumerate and hash every file under `root`.
    ///
    /// A file that fails to hash, or vanishes between hashing and stat, is
    /// recorded as unreadable and the scan continues; only a failure to
    /// traverse the root at all is fatal.
    fn scan_tree(&self, root: &Path) -> Result<TreeScan, EngineError> {
        let walker = Walker::with_config(root, self.scan.clone());
        let mut snapshot = Snapshot::new();
        let mut unreadable = Vec::new();

        for entry in walker.files() {
            let entry = entry?;
            match hasher::hash_file(&entry.absolute) {
                Ok(hash) => match fs::metadata(&entry.absolute) {
                    Ok(metadata) => {
                        snapshot.insert(entry.relative, FileRecord::new(hash, &metadata));
                    }
                    Err(err) => {
                        warn!(path = %entry.relative, error = %err, "file vanished after hashing");
                        unreadable.push(entry.relative);
                    }
                },
                Err(err) => {
                    warn!(path = %entry.relative, error = %err, "failed to hash file");
                    unreadable.push(entry.relative);
                }
            }
        }

        unreadable.sort();
        Ok(TreeScan {
            snapshot,
            unreadable,
        })
    }
}
