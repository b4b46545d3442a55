//! Snapshot classification
//!
//! The three-way diff between the stored baseline and the current snapshot.
//! Purely key- and hash-based: sizes and timestamps never participate in
//! the decision, since an mtime can be forged or reset while the integrity
//! claim must rest on content.

use crate::baseline::Snapshot;
use crate::report::ChangeReport;
use chrono::Utc;
use std::collections::BTreeSet;

/// Classify every tracked path into exactly one bucket.
///
/// - unreadable during this scan (tracked or not) → `unreadable`
/// - in the baseline, absent from current → `deleted`
/// - in both, digests differ → `modified`
/// - in both, digests equal → counted as unchanged
/// - in current only → `added`
///
/// `unreadable` paths never appear in `current` (the scan omits them), so
/// the buckets partition the union of baseline keys, current keys, and the
/// unreadable set. The lists come out sorted because the snapshots iterate
/// in key order.
pub fn classify(baseline: &Snapshot, current: &Snapshot, unreadable: Vec<String>) -> ChangeReport {
    let skip: BTreeSet<&str> = unreadable.iter().map(String::as_str).collect();

    let mut added = Vec::new();
    let mut modified = Vec::new();
    let mut deleted = Vec::new();
    let mut unchanged_count = 0u64;

    for (path, record) in baseline {
        if skip.contains(path.as_str()) {
            continue;
        }
        match current.get(path) {
            None => deleted.push(path.clone()),
            Some(current_record) if current_record.hash != record.hash => {
                modified.push(path.clone())
            }
            Some(_) => unchanged_count += 1,
        }
    }

    for path in current.keys() {
        if !baseline.contains_key(path) {
            added.push(path.clone());
        }
    }

    ChangeReport {
        status: "success".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        added,
        modified,
        deleted,
        unreadable,
        unchanged_count,
        total_files: current.len() as u64,
    }
}
