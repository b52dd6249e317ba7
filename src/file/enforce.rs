use std::fs::{self, Permissions};
use std::os::unix::fs::{PermissionsExt, chown};
use std::path::Path;

use super::SecureFile;
use crate::error::{FileError, Result};

impl SecureFile {
    /// Apply the policy mode, then the policy owner and group, to `path`.
    ///
    /// Stops at the first rejected call without undoing the earlier one, so a
    /// failed chown leaves the new mode in place.
    pub fn secure(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        fs::set_permissions(path, Permissions::from_mode(self.policy.mode))
            .map_err(|e| FileError::from_policy_change(path, e))?;

        chown(path, Some(self.policy.uid), Some(self.policy.gid))
            .map_err(|e| FileError::from_policy_change(path, e))?;

        Ok(())
    }
}
