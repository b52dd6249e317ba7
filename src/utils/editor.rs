//! Editor utilities for editing files in place.

use std::path::Path;
use std::process::Command;

use crate::config::Config;
use crate::error::{FileError, Result};

/// Open the configured editor on `path` and wait for it to exit.
///
/// The editor setting may carry arguments (e.g. "code --wait").
pub fn open_in_editor(config: &Config, path: &Path) -> Result<()> {
    let editor = config.editor();
    let mut parts = editor.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| FileError::config("editor is empty"))?;

    let status = Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .map_err(|e| FileError::Other(format!("could not run editor '{}': {}", program, e)))?;

    if !status.success() {
        // A non-zero exit (e.g. vim's :cq) abandons the edit.
        return Err(FileError::Cancelled);
    }
    Ok(())
}
