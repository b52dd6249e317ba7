//! Inspect command handlers - reporting size, bits and policy status.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{FileError, Result};
use crate::file::{self, FileStatus, SecureFile};
use crate::policy::SecurityPolicy;
use crate::utils::format_error;

/// Handle the size command - print the size in KiB
pub fn handle_size(path: &Path) -> Result<()> {
    let kib = file::size(path)?;
    println!("{:.2} KiB", kib);
    Ok(())
}

/// Handle the bits command - print the decimal permission bits
pub fn handle_bits(path: &Path) -> Result<()> {
    println!("{}", file::permission_bits(path)?);
    Ok(())
}

/// Handle the check command. Returns whether every path is secure.
///
/// A path that cannot be checked is reported on stderr and counts as
/// insecure; the remaining paths are still checked.
pub fn handle_check(files: &SecureFile, paths: &[PathBuf], json: bool) -> Result<bool> {
    let (report, failures) = collect_statuses(files, paths);
    for e in &failures {
        eprintln!("{} ERROR", format_error(e));
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for status in &report {
            println!("{}", render_status(status, files.policy()));
        }
    }

    Ok(failures.is_empty() && report.iter().all(|s| s.secure))
}

/// Check every path, splitting the results into statuses and failures.
fn collect_statuses(files: &SecureFile, paths: &[PathBuf]) -> (Vec<FileStatus>, Vec<FileError>) {
    let mut report = Vec::with_capacity(paths.len());
    let mut failures = Vec::new();
    for path in paths {
        match files.status(path) {
            Ok(status) => {
                debug!(path = %path.display(), secure = status.secure, "checked");
                report.push(status);
            }
            Err(e) => {
                debug!(path = %path.display(), "could not check: {}", e);
                failures.push(e);
            }
        }
    }
    (report, failures)
}

/// One line of the text report.
fn render_status(status: &FileStatus, policy: &SecurityPolicy) -> String {
    let verdict = if status.secure {
        "secure".to_string()
    } else {
        format!(
            "INSECURE (want {:03} {}:{})",
            policy.bits(),
            policy.uid,
            policy.gid
        )
    };
    format!(
        "{}: {:03} {}:{} {}",
        status.path.display(),
        status.bits,
        status.uid,
        status.gid,
        verdict
    )
}
