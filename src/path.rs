//! Path utilities used by the file operations.

use std::path::Path;

/// Whether `path` currently resolves to a filesystem entry.
///
/// Symlinks are followed, so a dangling link does not exist. The answer is
/// only a snapshot: another process may create or remove the entry before the
/// caller acts on it.
pub fn exists(path: impl AsRef<Path>) -> bool {
    std::fs::metadata(path.as_ref()).is_ok()
}
