//! Filesystem walker for enumerating files under a monitored root

use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::scan::path;
use std::path::PathBuf;
use tracing::warn;
use walkdir::WalkDir;

/// One regular file discovered during a walk.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Normalized path relative to the walk root (the snapshot key).
    pub relative: String,
    /// Absolute path, suitable for opening the file.
    pub absolute: PathBuf,
}

/// Recursive walker over a single root directory.
///
/// Yields only regular files; directories, symlinks, and special files are
/// never produced as entries. Cycle avoidance on symlinked directories is
/// whatever `walkdir` provides.
pub struct Walker {
    root: PathBuf,
    config: ScanConfig,
}

impl Walker {
    /// Create a walker with default scan configuration.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            config: ScanConfig::default(),
        }
    }

    /// Create a walker with custom scan configuration.
    pub fn with_config(root: impl Into<PathBuf>, config: ScanConfig) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    /// Lazily enumerate the files under the root.
    ///
    /// A traversal error on the root itself is yielded as `Err` and ends the
    /// walk; any deeper error (permission denied, entry deleted mid-walk) is
    /// logged and skipped so one bad sub-path never aborts the scan. The
    /// sequence is finite and not restartable; call `files()` again for a
    /// second pass.
    pub fn files(&self) -> Files {
        let inner = WalkDir::new(&self.root)
            .follow_links(self.config.follow_symlinks)
            .max_depth(self.config.max_depth.unwrap_or(usize::MAX))
            .into_iter();
        Files {
            root: self.root.clone(),
            inner,
        }
    }
}

/// Iterator returned by [`Walker::files`].
pub struct Files {
    root: PathBuf,
    inner: walkdir::IntoIter,
}

impl Iterator for Files {
    type Item = Result<FileEntry, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    if err.depth() == 0 {
                        return Some(Err(ScanError::RootUnreadable {
                            path: self.root.clone(),
                            source: err,
                        }));
                    }
                    warn!(path = ?err.path(), error = %err, "skipping unreadable entry");
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let absolute = entry.into_path();
            match path::relative_key(&self.root, &absolute) {
                Some(relative) => return Some(Ok(FileEntry { relative, absolute })),
                None => {
                    warn!(path = ?absolute, "skipping entry outside walk root");
                    continue;
                }
            }
        }
    }
}
