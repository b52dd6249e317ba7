//! Manage command handlers - securing, creating, cloning and removing files.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::Result;
use crate::file::{self, SecureFile};

/// Handle the secure command - apply the policy to each path in turn
pub fn handle_secure(files: &SecureFile, paths: &[PathBuf]) -> Result<()> {
    let policy = files.policy();
    for path in paths {
        debug!(
            path = %path.display(),
            mode = %format!("{:o}", policy.mode),
            uid = policy.uid,
            gid = policy.gid,
            "securing"
        );
        files.secure(path)?;
        info!("secured {}", path.display());
    }
    Ok(())
}

/// Handle the create command
pub fn handle_create(files: &SecureFile, path: &Path, secure: bool) -> Result<()> {
    files.create(path, secure)?;
    info!(secure, "created {}", path.display());
    Ok(())
}

/// Handle the clone command
pub fn handle_clone(files: &SecureFile, from: &Path, to: &Path, secure: bool) -> Result<()> {
    files.clone_file(from, to, secure)?;
    info!(secure, "cloned {} to {}", from.display(), to.display());
    Ok(())
}

/// Handle the remove command
pub fn handle_remove(path: &Path, silent: bool) -> Result<()> {
    file::remove(path, silent)?;
    info!("removed {}", path.display());
    Ok(())
}
