//! Error reporting utilities for the CLI.

use crate::error::{ErrorKind, FileError};

/// Exit code for a failed command, by error kind.
pub fn exit_code(e: &FileError) -> i32 {
    match e.kind() {
        ErrorKind::NotFound => 2,
        ErrorKind::Permission => 3,
        ErrorKind::Io => 4,
        ErrorKind::Config | ErrorKind::Validation => 64,
        ErrorKind::Cancelled => 130,
        ErrorKind::Other => 1,
    }
}

/// Format an error in a user-friendly way.
pub fn format_error(e: &FileError) -> String {
    match e {
        FileError::Permission { .. } if !running_as_root() => {
            format!("{} (changing ownership requires root)", e)
        }
        _ => e.to_string(),
    }
}

fn running_as_root() -> bool {
    // SAFETY: geteuid has no preconditions and cannot fail.
    unsafe { libc::geteuid() == 0 }
}
