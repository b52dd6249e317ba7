//! Unified error type for securefile.
//!
//! All public APIs return `Result<T, FileError>`. The three filesystem kinds
//! (`NotFound`, `Permission`, `Io`) always carry the offending path and the
//! OS-reported error text, plus the underlying `io::Error` when the OS raised
//! one. The remaining variants belong to the CLI layer.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// The unified error type for all securefile operations.
#[derive(Debug)]
pub enum FileError {
    // ── Filesystem ─────────────────────────────────────────────────────
    /// The path could not be resolved when metadata was required.
    NotFound {
        path: PathBuf,
        message: String,
        source: Option<io::Error>,
    },

    /// The OS rejected a mode or ownership change.
    Permission {
        path: PathBuf,
        message: String,
        source: Option<io::Error>,
    },

    /// Any other OS-level failure (open, create, transfer, delete), or a
    /// pre-existing path in `create`.
    Io {
        path: PathBuf,
        message: String,
        source: Option<io::Error>,
    },

    // ── Configuration ──────────────────────────────────────────────────
    /// KDL config file parsing or validation error.
    Config(String),

    // ── User interaction ───────────────────────────────────────────────
    /// The user cancelled an interactive operation.
    Cancelled,

    /// User input validation failed.
    Validation(String),

    // ── Catch-all ──────────────────────────────────────────────────────
    /// Any other error.
    Other(String),
}

/// Discriminant of a [`FileError`], for callers that only care about the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Permission,
    Io,
    Config,
    Cancelled,
    Validation,
    Other,
}

// ── Display ────────────────────────────────────────────────────────────

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileError::NotFound { path, message, .. } => {
                write!(f, "{}: {}", path.display(), message)
            }
            FileError::Permission { path, message, .. } => {
                write!(f, "{}: permission error: {}", path.display(), message)
            }
            FileError::Io { path, message, .. } => {
                write!(f, "{}: {}", path.display(), message)
            }
            FileError::Config(msg) => write!(f, "config error: {}", msg),
            FileError::Cancelled => write!(f, "cancelled"),
            FileError::Validation(msg) => write!(f, "{}", msg),
            FileError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileError::NotFound { source, .. }
            | FileError::Permission { source, .. }
            | FileError::Io { source, .. } => source
                .as_ref()
                .map(|e| e as &(dyn std::error::Error + 'static)),
            _ => None,
        }
    }
}

// ── From implementations for common error types ────────────────────────

impl From<serde_json::Error> for FileError {
    fn from(e: serde_json::Error) -> Self {
        FileError::Other(format!("JSON error: {}", e))
    }
}

impl From<String> for FileError {
    fn from(s: String) -> Self {
        FileError::Other(s)
    }
}

impl From<&str> for FileError {
    fn from(s: &str) -> Self {
        FileError::Other(s.to_string())
    }
}

// ── Convenience constructors ───────────────────────────────────────────

impl FileError {
    /// Create a not-found error for `path`.
    pub fn not_found(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        FileError::NotFound {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a permission error for `path`.
    pub fn permission(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        FileError::Permission {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error for `path`.
    pub fn io(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        FileError::Io {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
            source: None,
        }
    }

    /// Wrap an OS error raised while reading metadata for `path`.
    pub(crate) fn from_stat(path: impl AsRef<Path>, e: io::Error) -> Self {
        FileError::not_found(path, os_message(&e)).with_source(e)
    }

    /// Wrap an OS error raised while changing mode or ownership of `path`.
    ///
    /// A path that vanished is still reported as `NotFound`.
    pub(crate) fn from_policy_change(path: impl AsRef<Path>, e: io::Error) -> Self {
        let err = if e.kind() == io::ErrorKind::NotFound {
            FileError::not_found(path, os_message(&e))
        } else {
            FileError::permission(path, os_message(&e))
        };
        err.with_source(e)
    }

    /// Wrap any other OS error raised for `path`.
    pub(crate) fn from_io(path: impl AsRef<Path>, e: io::Error) -> Self {
        FileError::io(path, os_message(&e)).with_source(e)
    }

    /// Attach the OS error to a filesystem variant; other variants are returned as is.
    fn with_source(mut self, e: io::Error) -> Self {
        match &mut self {
            FileError::NotFound { source, .. }
            | FileError::Permission { source, .. }
            | FileError::Io { source, .. } => *source = Some(e),
            _ => {}
        }
        self
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        FileError::Validation(message.into())
    }

    /// Create a config error.
    pub fn config(message: impl Into<String>) -> Self {
        FileError::Config(message.into())
    }

    /// The kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            FileError::NotFound { .. } => ErrorKind::NotFound,
            FileError::Permission { .. } => ErrorKind::Permission,
            FileError::Io { .. } => ErrorKind::Io,
            FileError::Config(_) => ErrorKind::Config,
            FileError::Cancelled => ErrorKind::Cancelled,
            FileError::Validation(_) => ErrorKind::Validation,
            FileError::Other(_) => ErrorKind::Other,
        }
    }

    /// The path this error refers to, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            FileError::NotFound { path, .. }
            | FileError::Permission { path, .. }
            | FileError::Io { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// The OS error text without Rust's " (os error N)" suffix, matching what
/// `strerror` would print.
fn os_message(e: &io::Error) -> String {
    let msg = e.to_string();
    match msg.find(" (os error ") {
        Some(idx) => msg[..idx].to_string(),
        None => msg,
    }
}

/// Convenience type alias for Results using FileError.
pub type Result<T> = std::result::Result<T, FileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_message_strips_errno_suffix() {
        let e = io::Error::from_raw_os_error(libc::ENOENT);
        assert_eq!(os_message(&e), "No such file or directory");
    }

    #[test]
    fn test_policy_change_maps_missing_path_to_not_found() {
        let e = io::Error::from_raw_os_error(libc::ENOENT);
        assert_eq!(
            FileError::from_policy_change("/nope", e).kind(),
            ErrorKind::NotFound
        );

        let e = io::Error::from_raw_os_error(libc::EPERM);
        let err = FileError::from_policy_change("/etc/x", e);
        assert_eq!(err.kind(), ErrorKind::Permission);
        assert_eq!(err.path(), Some(Path::new("/etc/x")));
    }

    #[test]
    fn test_os_errors_are_kept_as_source() {
        use std::error::Error;

        let e = io::Error::from_raw_os_error(libc::EACCES);
        let err = FileError::from_io("/etc/x", e);
        let source = err.source().unwrap();
        let io_err = source.downcast_ref::<io::Error>().unwrap();
        assert_eq!(io_err.raw_os_error(), Some(libc::EACCES));

        let e = io::Error::from_raw_os_error(libc::EPERM);
        assert!(FileError::from_policy_change("/etc/x", e).source().is_some());

        assert!(FileError::io("/etc/x", "file already exists").source().is_none());
        assert!(FileError::Cancelled.source().is_none());
    }

    #[test]
    fn test_display_carries_path_and_message() {
        let err = FileError::io("/tmp/a", "file already exists");
        assert_eq!(err.to_string(), "/tmp/a: file already exists");
        assert_eq!(FileError::Cancelled.to_string(), "cancelled");
    }
}
