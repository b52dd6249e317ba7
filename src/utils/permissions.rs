//! File permission utilities for restricting access to files the CLI writes.

use std::path::Path;

use crate::error::{FileError, Result};

/// Set restrictive permissions (owner-only read/write) on a file.
pub fn restrict_file_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let perms = std::fs::Permissions::from_mode(0o600);
    std::fs::set_permissions(path, perms).map_err(|e| FileError::from_policy_change(path, e))
}
