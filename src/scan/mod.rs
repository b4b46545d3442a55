//! Filesystem scanning
//!
//! Enumerates regular files under a monitored root and computes their
//! content digests. The walker and hasher together produce the raw material
//! for a snapshot; neither knows about baselines or diffs.

pub mod hasher;
pub mod path;
pub mod walker;
