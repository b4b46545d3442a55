//! Baseline store integration across instances

use fimon::baseline::{BaselineStore, FileRecord, Snapshot};
use tempfile::TempDir;

fn snapshot_of(entries: &[(&str, &str, u64, f64)]) -> Snapshot {
    entries
        .iter()
        .map(|(path, hash, size, mtime)| {
            (
                path.to_string(),
                FileRecord {
                    hash: hash.to_string(),
                    size: *size,
                    last_modified: *mtime,
                },
            )
        })
        .collect()
}

/// A snapshot saved by one store instance loads identically from another
/// instance over the same path, floating-point timestamps included.
#[test]
fn test_round_trip_across_instances() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("baseline.json");

    let snapshot = snapshot_of(&[
        ("a.txt", "0a1b2c", 42, 1700000000.123456),
        ("deep/nested/b.txt", "3d4e5f", 0, 1700000001.0),
    ]);

    BaselineStore::new(&path).save(&snapshot).unwrap();
    let loaded = BaselineStore::new(&path).load().unwrap().unwrap();

    assert_eq!(loaded, snapshot);
}

/// Loading from a path that was never written is the not-found state.
#[test]
fn test_fresh_path_loads_none() {
    let temp_dir = TempDir::new().unwrap();
    let store = BaselineStore::new(temp_dir.path().join("never-written.json"));
    assert!(store.load().unwrap().is_none());
}

/// An empty snapshot round-trips (a baseline over an empty tree is valid).
#[test]
fn test_empty_snapshot_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let store = BaselineStore::new(temp_dir.path().join("baseline.json"));

    store.save(&Snapshot::new()).unwrap();
    let loaded = store.load().unwrap().unwrap();
    assert!(loaded.is_empty());
}

/// No temp file is left behind after a successful save.
#[test]
fn test_save_leaves_no_temp_file() {
    let temp_dir = TempDir::new().unwrap();
    let store = BaselineStore::new(temp_dir.path().join("baseline.json"));
    store
        .save(&snapshot_of(&[("a.txt", "ff", 1, 0.0)]))
        .unwrap();

    let names: Vec<_> = std::fs::read_dir(temp_dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["baseline.json"]);
}
