//! Edit command handler - editing a secured file through a scratch copy.
//!
//! The secured file is never opened by the editor. Its content is cloned
//! into a private scratch file, the editor works on that, and only a changed,
//! non-empty result is cloned back with the policy applied.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::Config;
use crate::error::{FileError, Result};
use crate::file::{self, SecureFile};
use crate::path;
use crate::utils::{content_hash, open_in_editor, restrict_file_permissions};

/// Removes the scratch file on every exit path.
struct Scratch {
    path: PathBuf,
}

impl Scratch {
    /// Create an empty owner-only scratch file for `target` under `dir`.
    fn create(files: &SecureFile, dir: &Path, target: &Path) -> Result<Self> {
        let name = target
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "file".to_string());
        let path = dir.join(format!("securefile-{}.{}", name, std::process::id()));

        // A leftover from a crashed run with the same pid would make create fail.
        file::remove(&path, true)?;
        files.create(&path, false)?;
        let scratch = Scratch { path };
        restrict_file_permissions(&scratch.path)?;
        Ok(scratch)
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let _ = file::remove(&self.path, true);
    }
}

/// Outcome of an edit session.
#[derive(Debug, PartialEq, Eq)]
pub enum EditOutcome {
    Unchanged,
    Written,
}

/// Handle the edit command
pub fn handle_edit(config: &Config, files: &SecureFile, target: &Path) -> Result<EditOutcome> {
    edit_with(config, files, target, |scratch| open_in_editor(config, scratch))
}

/// Run an edit session with `edit` standing in for the interactive editor.
pub(crate) fn edit_with<F>(
    config: &Config,
    files: &SecureFile,
    target: &Path,
    edit: F,
) -> Result<EditOutcome>
where
    F: FnOnce(&Path) -> Result<()>,
{
    if !path::exists(target) {
        return Err(FileError::not_found(target, "no such file"));
    }

    let scratch = Scratch::create(files, &config.temp_dir(), target)?;
    debug!(scratch = %scratch.path.display(), "cloning into scratch copy");
    // The scratch file exists, so it keeps its owner-only mode.
    files.clone_file(target, &scratch.path, false)?;

    let before = content_hash(&scratch.path)?;
    edit(&scratch.path)?;
    let after = content_hash(&scratch.path)?;

    if before == after {
        info!("{} unchanged", target.display());
        return Ok(EditOutcome::Unchanged);
    }
    if file::size(&scratch.path)? == 0.0 {
        return Err(FileError::validation(format!(
            "refusing to replace {} with an empty file",
            target.display()
        )));
    }

    files.clone_file(&scratch.path, target, true)?;
    info!("wrote {}", target.display());
    Ok(EditOutcome::Written)
}
