//! securefile - ownership and permission policy for sensitive files.
//!
//! This crate provides functionality to:
//! - Check whether a file carries exactly the policy mode, owner and group
//! - Enforce that policy on a file
//! - Create, remove and measure files
//! - Clone file content with a kernel-assisted copy, optionally securing the copy
//!
//! The default policy is mode 440 owned by root:root.
//!
//! # Example
//!
//! ```no_run
//! use securefile::{SecureFile, SecurityPolicy};
//!
//! fn main() -> securefile::Result<()> {
//!     let files = SecureFile::new(SecurityPolicy::ROOT_READ_ONLY);
//!
//!     if !files.is_secure("/etc/securefile.conf")? {
//!         files.secure("/etc/securefile.conf")?;
//!     }
//!     files.clone_file("/etc/securefile.conf", "/etc/securefile.conf.bak", true)?;
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod file;
pub mod logging;
pub mod path;
pub mod policy;
pub mod utils;

// Re-export commonly used types at the crate root
pub use config::Config;
pub use error::{ErrorKind, FileError, Result};
pub use file::{FileStatus, SecureFile};
pub use policy::SecurityPolicy;
