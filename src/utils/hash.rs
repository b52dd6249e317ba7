//! Content digests for change detection.

use sha2::{Digest, Sha256};
use std::path::Path;

use crate::error::{FileError, Result};

/// Compute the hex-encoded SHA256 of a file's content.
pub fn content_hash(path: &Path) -> Result<String> {
    let content = std::fs::read(path).map_err(|e| FileError::from_io(path, e))?;
    let mut hasher = Sha256::new();
    hasher.update(&content);
    Ok(hex::encode(hasher.finalize()))
}
