use std::fs::{self, Metadata};
use std::os::unix::fs::MetadataExt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::SecureFile;
use crate::error::{FileError, Result};
use crate::policy;

/// A single metadata snapshot of a file judged against a policy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileStatus {
    pub path: PathBuf,
    pub bits: u32,
    pub uid: u32,
    pub gid: u32,
    /// Size in KiB.
    pub size: f64,
    pub secure: bool,
}

pub(super) fn stat(path: &Path) -> Result<Metadata> {
    fs::metadata(path).map_err(|e| FileError::from_stat(path, e))
}

/// The file's permission bits in decimal form (`0o640` reads as `640`).
pub fn permission_bits(path: impl AsRef<Path>) -> Result<u32> {
    let meta = stat(path.as_ref())?;
    Ok(policy::permission_bits(meta.mode()))
}

impl SecureFile {
    /// Whether `path` carries exactly the policy mode, owner and group.
    pub fn is_secure(&self, path: impl AsRef<Path>) -> Result<bool> {
        let meta = stat(path.as_ref())?;
        Ok(self.satisfied_by(&meta))
    }

    /// Read `path` once and report its bits, ownership, size and verdict.
    pub fn status(&self, path: impl AsRef<Path>) -> Result<FileStatus> {
        let path = path.as_ref();
        let meta = stat(path)?;
        Ok(FileStatus {
            path: path.to_path_buf(),
            bits: policy::permission_bits(meta.mode()),
            uid: meta.uid(),
            gid: meta.gid(),
            size: meta.size() as f64 / 1024.0,
            secure: self.satisfied_by(&meta),
        })
    }

    fn satisfied_by(&self, meta: &Metadata) -> bool {
        self.policy
            .is_satisfied_by(policy::permission_bits(meta.mode()), meta.uid(), meta.gid())
    }
}
