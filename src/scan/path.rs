//! Relative-path normalization for snapshot keys

use std::path::Path;
use unicode_normalization::UnicodeNormalization;

/// Build the snapshot key for `path` relative to `root`.
///
/// Keys use `/` as the separator on every platform and are normalized to
/// Unicode NFC, so a baseline written on one platform diffs cleanly against
/// a scan on another. Returns `None` when `path` is not under `root`, which
/// cannot happen for entries produced by a walk of `root`.
pub fn relative_key(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let joined = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    Some(joined.nfc().collect())
}
