//! Fimon: File Integrity Monitoring
//!
//! Builds a cryptographic baseline of a directory tree's contents and later
//! detects additions, modifications, and deletions relative to that baseline
//! by comparing SHA-256 content digests.

pub mod baseline;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod report;
pub mod scan;
