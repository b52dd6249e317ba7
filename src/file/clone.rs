use std::fs::{File, OpenOptions, Permissions};
use std::io;
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt, fchown};
use std::path::Path;

use super::SecureFile;
use crate::error::{FileError, Result};

impl SecureFile {
    /// Copy the content of `from` into `to`.
    ///
    /// `to` is created with the policy mode if missing, or truncated if it
    /// exists. Without `secure` the creation mode is subject to the umask and
    /// an existing file keeps its mode. With `secure`, the policy mode, owner
    /// and group are set on the open `to` descriptor before any byte is
    /// written.
    ///
    /// The copy is done by the kernel in as many transfers as needed for the
    /// size reported by the open source descriptor. A transfer that moves no
    /// bytes is an error, which means an empty source cannot be cloned.
    /// Nothing is cleaned up on failure: `to` may be left empty or partially
    /// written.
    pub fn clone_file(
        &self,
        from: impl AsRef<Path>,
        to: impl AsRef<Path>,
        secure: bool,
    ) -> Result<()> {
        let (from, to) = (from.as_ref(), to.as_ref());

        let src = File::open(from).map_err(|e| FileError::from_io(from, e))?;
        let dst = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(self.policy.mode)
            .open(to)
            .map_err(|e| FileError::from_io(to, e))?;

        if secure {
            fchown(&dst, Some(self.policy.uid), Some(self.policy.gid))
                .map_err(|e| FileError::from_io(to, e))?;
            dst.set_permissions(Permissions::from_mode(self.policy.mode))
                .map_err(|e| FileError::from_io(to, e))?;
        }

        let len = src
            .metadata()
            .map_err(|e| FileError::from_io(from, e))?
            .len();

        transfer(&src, &dst, len).map_err(|e| FileError::from_io(to, e))
        // `dst` then `src` are closed here, or at whichever `?` returned early.
    }
}

/// Largest count a single sendfile(2) call will move on Linux.
#[cfg(target_os = "linux")]
const MAX_TRANSFER: u64 = 0x7fff_f000;

#[cfg(target_os = "linux")]
fn transfer(src: &File, dst: &File, len: u64) -> io::Result<()> {
    use std::os::fd::AsRawFd;

    let mut remaining = len;
    loop {
        let count = remaining.min(MAX_TRANSFER) as usize;
        // SAFETY: both descriptors are open for the lifetime of the borrows,
        // and a null offset makes the kernel use and advance the file offset.
        let sent = unsafe {
            libc::sendfile(
                dst.as_raw_fd(),
                src.as_raw_fd(),
                std::ptr::null_mut(),
                count,
            )
        };
        if sent < 0 {
            return Err(io::Error::last_os_error());
        }
        if sent == 0 {
            return Err(no_bytes_transferred());
        }

        remaining = remaining.saturating_sub(sent as u64);
        if remaining == 0 {
            return Ok(());
        }
    }
}

#[cfg(not(target_os = "linux"))]
fn transfer(src: &File, dst: &File, len: u64) -> io::Result<()> {
    use std::io::Read;

    let mut reader = Read::take(src, len);
    let mut writer = dst;
    let copied = io::copy(&mut reader, &mut writer)?;
    if copied == 0 || copied < len {
        return Err(no_bytes_transferred());
    }
    Ok(())
}

fn no_bytes_transferred() -> io::Error {
    io::Error::new(io::ErrorKind::WriteZero, "no bytes transferred")
}
