//! Streaming SHA-256 content hashing

use crate::error::ScanError;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read buffer size. Files are streamed through the digest in chunks of
/// this size so memory stays constant per file, whatever the file's size.
pub const CHUNK_SIZE: usize = 64 * 1024;

/// Compute the SHA-256 hex digest of a file's contents.
///
/// Same bytes always produce the same digest; this is the correctness
/// foundation of the whole system. Any open or read failure is returned as
/// an error so the caller can treat the file as unhashable.
pub fn hash_file(path: &Path) -> Result<String, ScanError> {
    let mut file = File::open(path).map_err(|source| ScanError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut hasher = Sha256::new();
    let mut buf = [0u8; CHUNK_SIZE];
    loop {
        let read = file.read(&mut buf).map_err(|source| ScanError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if read == 0 {
            break;
        }
        hasher.update(&buf[..read]);
    }

    Ok(hex::encode(hasher.finalize()))
}

/// Compute the SHA-256 hex digest of an in-memory byte slice.
pub fn hash_bytes(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}
