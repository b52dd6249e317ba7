use std::fs::{self, OpenOptions};
use std::os::unix::fs::MetadataExt;
use std::path::Path;

use super::SecureFile;
use super::query::stat;
use crate::error::{FileError, Result};
use crate::path;

/// Size of `path` in KiB, unrounded.
pub fn size(path: impl AsRef<Path>) -> Result<f64> {
    let meta = stat(path.as_ref())?;
    Ok(meta.size() as f64 / 1024.0)
}

/// Delete the file at `path`.
///
/// A path that does not exist is not an error. With `silent`, a failed
/// deletion is swallowed as well.
pub fn remove(path: impl AsRef<Path>, silent: bool) -> Result<()> {
    let path = path.as_ref();
    if !path::exists(path) {
        return Ok(());
    }

    match fs::remove_file(path) {
        Err(e) if !silent => Err(FileError::from_io(path, e)),
        _ => Ok(()),
    }
}

impl SecureFile {
    /// Create an empty file at `path`, securing it when `secure` is set.
    ///
    /// Fails if `path` already exists. The file is created before the policy
    /// is applied, so a rejected chown leaves an empty file behind.
    pub fn create(&self, path: impl AsRef<Path>, secure: bool) -> Result<()> {
        let path = path.as_ref();
        if path::exists(path) {
            return Err(FileError::io(path, "file already exists"));
        }

        // A racing creator between the check and here surfaces as EEXIST.
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| FileError::from_io(path, e))?;

        if secure {
            self.secure(path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::file::test_support::running_as_root;

    #[test]
    fn test_size_in_kib() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blob");

        fs::write(&path, vec![0u8; 2048]).unwrap();
        assert_eq!(size(&path).unwrap(), 2.0);

        fs::write(&path, vec![0u8; 1536]).unwrap();
        assert_eq!(size(&path).unwrap(), 1.5);

        fs::write(&path, b"").unwrap();
        assert_eq!(size(&path).unwrap(), 0.0);
    }

    #[test]
    fn test_size_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = size(dir.path().join("missing")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_remove() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doomed");
        fs::write(&path, b"x").unwrap();

        remove(&path, false).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_remove_missing_path_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing");

        remove(&path, false).unwrap();
        remove(&path, true).unwrap();
    }

    #[test]
    fn test_remove_failure_respects_silent() {
        let dir = tempfile::tempdir().unwrap();
        // unlink(2) refuses directories.
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).unwrap();

        let err = remove(&sub, false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert_eq!(err.path(), Some(sub.as_path()));

        remove(&sub, true).unwrap();
        assert!(sub.exists());
    }

    #[test]
    fn test_create_rejects_existing_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conf");
        fs::write(&path, b"keep me").unwrap();

        let err = SecureFile::default().create(&path, false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.to_string().contains("file already exists"));
        assert_eq!(fs::read(&path).unwrap(), b"keep me");
    }

    #[test]
    fn test_create_without_securing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conf");
        let files = SecureFile::default();

        files.create(&path, false).unwrap();
        assert_eq!(size(&path).unwrap(), 0.0);
        // Created with the ambient umask defaults, which are writable by the owner.
        assert!(!files.is_secure(&path).unwrap());
    }

    #[test]
    fn test_create_materializes_file_before_securing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conf");
        let files = SecureFile::default();

        let result = files.create(&path, true);
        // Securing never reports NotFound: the empty file exists first.
        assert!(path.exists());
        if running_as_root() {
            result.unwrap();
            assert!(files.is_secure(&path).unwrap());
        } else {
            assert_eq!(result.unwrap_err().kind(), ErrorKind::Permission);
        }
    }
}
