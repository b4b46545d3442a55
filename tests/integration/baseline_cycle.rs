//! Integration tests for baseline construction and persistence

use crate::integration::test_utils::{engine_with_store, fixture_tree};
use std::fs;

/// Baseline over {a.txt: "hello", b.txt: "world"} records both files with
/// the correct SHA-256 digests.
#[test]
fn test_baseline_records_known_digests() {
    let tree = fixture_tree(&[("a.txt", "hello"), ("b.txt", "world")]);
    let (engine, _store_dir) = engine_with_store();

    let outcome = engine.build_baseline(tree.path()).unwrap();
    assert_eq!(outcome.files_recorded, 2);

    let snapshot = engine.store().load().unwrap().unwrap();
    assert_eq!(
        snapshot["a.txt"].hash,
        "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
    );
    assert_eq!(
        snapshot["b.txt"].hash,
        "486ea46224d1bb4fb680f34f7c9ad96a8f24ec88be73ea8e5a6c65260e9cb8a7"
    );
    assert_eq!(snapshot["a.txt"].size, 5);
}

/// The stored baseline is a pretty-printed JSON mapping an operator can
/// inspect out of band.
#[test]
fn test_baseline_file_is_inspectable_json() {
    let tree = fixture_tree(&[("a.txt", "hello"), ("nested/b.txt", "world")]);
    let (engine, _store_dir) = engine_with_store();
    engine.build_baseline(tree.path()).unwrap();

    let text = fs::read_to_string(engine.store().path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    // Keys are relative paths with platform-independent separators.
    assert!(value.get("a.txt").is_some());
    assert!(value.get("nested/b.txt").is_some());

    let entry = &value["a.txt"];
    assert_eq!(entry["hash"].as_str().unwrap().len(), 64);
    assert!(entry["size"].is_u64());
    assert!(entry["last_modified"].is_f64());
}

/// Rebuilding over an unchanged tree produces byte-identical storage.
#[test]
fn test_rebuild_unchanged_tree_is_idempotent() {
    let tree = fixture_tree(&[("a.txt", "hello"), ("sub/b.txt", "world")]);
    let (engine, _store_dir) = engine_with_store();

    engine.build_baseline(tree.path()).unwrap();
    let first = fs::read(engine.store().path()).unwrap();

    engine.build_baseline(tree.path()).unwrap();
    let second = fs::read(engine.store().path()).unwrap();

    assert_eq!(first, second);
}

/// A rebuild replaces the baseline wholesale; stale entries do not linger.
#[test]
fn test_rebuild_replaces_wholesale() {
    let tree = fixture_tree(&[("a.txt", "hello"), ("b.txt", "world")]);
    let (engine, _store_dir) = engine_with_store();
    engine.build_baseline(tree.path()).unwrap();

    fs::remove_file(tree.path().join("b.txt")).unwrap();
    let outcome = engine.build_baseline(tree.path()).unwrap();

    assert_eq!(outcome.files_recorded, 1);
    let snapshot = engine.store().load().unwrap().unwrap();
    assert!(!snapshot.contains_key("b.txt"));
}
