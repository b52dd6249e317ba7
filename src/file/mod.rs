//! Policy-checked operations on single files.
//!
//! Every operation is synchronous and re-reads or re-writes the filesystem on
//! each call. Descriptors opened along the way are owned by the call and
//! closed before it returns, on success and on every error path.
//!
//! Existence checks (`create`, `remove`) and the create-then-write sequence of
//! `clone_file` are not atomic with respect to other processes: another
//! process can change the path between the check and the action. Callers
//! needing stronger guarantees must coordinate outside this module.

mod clone;
mod enforce;
mod lifecycle;
mod query;

use std::path::Path;

use crate::error::Result;
use crate::policy::SecurityPolicy;

pub use lifecycle::{remove, size};
pub use query::{FileStatus, permission_bits};

/// File operations bound to a [`SecurityPolicy`].
///
/// Holds no filesystem state; the policy is the only thing it carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SecureFile {
    policy: SecurityPolicy,
}

impl SecureFile {
    /// Bind the operations to `policy`.
    pub fn new(policy: SecurityPolicy) -> Self {
        Self { policy }
    }

    /// The policy these operations check and enforce.
    pub fn policy(&self) -> &SecurityPolicy {
        &self.policy
    }
}

/// [`SecureFile::is_secure`] under the root read-only policy.
pub fn is_secure(path: impl AsRef<Path>) -> Result<bool> {
    SecureFile::default().is_secure(path)
}

/// [`SecureFile::secure`] under the root read-only policy.
pub fn secure(path: impl AsRef<Path>) -> Result<()> {
    SecureFile::default().secure(path)
}

/// [`SecureFile::create`] under the root read-only policy.
pub fn create(path: impl AsRef<Path>, secure: bool) -> Result<()> {
    SecureFile::default().create(path, secure)
}

/// [`SecureFile::clone_file`] under the root read-only policy.
pub fn clone_file(from: impl AsRef<Path>, to: impl AsRef<Path>, secure: bool) -> Result<()> {
    SecureFile::default().clone_file(from, to, secure)
}
