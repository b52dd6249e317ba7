//! Integration tests for the securefile library.
//!
//! These tests exercise the public API against real files in scratch
//! directories. Assertions that need chown to root branch on whether the
//! suite runs as root.

use std::fs;
use std::os::unix::fs::{MetadataExt, PermissionsExt};
use std::path::Path;

use securefile::file::{self, permission_bits, remove, size};
use securefile::{ErrorKind, SecureFile, SecurityPolicy};

fn running_as_root() -> bool {
    // SAFETY: geteuid has no preconditions and cannot fail.
    unsafe { libc::geteuid() == 0 }
}

fn write_with_mode(path: &Path, content: &[u8], mode: u32) {
    fs::write(path, content).unwrap();
    fs::set_permissions(path, fs::Permissions::from_mode(mode)).unwrap();
}

#[test]
fn test_permission_bits_reads_as_decimal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("conf");
    write_with_mode(&path, b"x", 0o640);

    let bits = permission_bits(&path).unwrap();
    assert_eq!(bits, 640);
    assert_ne!(bits, 0o640);
}

#[test]
fn test_is_secure_requires_mode_and_root_ownership() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("conf");
    write_with_mode(&path, b"x", 0o440);
    let meta = fs::metadata(&path).unwrap();

    let expected = meta.uid() == 0 && meta.gid() == 0;
    assert_eq!(file::is_secure(&path).unwrap(), expected);

    write_with_mode(&path, b"x", 0o640);
    assert!(!file::is_secure(&path).unwrap());
}

#[test]
fn test_secure_twice_matches_secure_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("conf");
    write_with_mode(&path, b"x", 0o600);
    let meta = fs::metadata(&path).unwrap();
    let files = SecureFile::new(SecurityPolicy::new(0o440, meta.uid(), meta.gid()));

    files.secure(&path).unwrap();
    let once = fs::metadata(&path).unwrap();
    files.secure(&path).unwrap();
    let twice = fs::metadata(&path).unwrap();

    assert_eq!(once.mode(), twice.mode());
    assert_eq!((once.uid(), once.gid()), (twice.uid(), twice.gid()));
    assert!(files.is_secure(&path).unwrap());
}

#[test]
fn test_root_policy_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let created = dir.path().join("created");
    let source = dir.path().join("source");
    let copy = dir.path().join("copy");
    write_with_mode(&source, b"permit nopass root", 0o644);

    if running_as_root() {
        file::create(&created, true).unwrap();
        assert!(file::is_secure(&created).unwrap());

        file::clone_file(&source, &copy, true).unwrap();
        assert!(file::is_secure(&copy).unwrap());
    } else {
        assert_eq!(
            file::create(&created, true).unwrap_err().kind(),
            ErrorKind::Permission
        );
        assert_eq!(
            file::clone_file(&source, &copy, true).unwrap_err().kind(),
            ErrorKind::Io
        );
    }

    assert_eq!(fs::read(&source).unwrap(), b"permit nopass root");
    assert_eq!(permission_bits(&source).unwrap(), 644);
}

#[test]
fn test_create_unsecured_is_not_secure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plain");

    file::create(&path, false).unwrap();
    assert!(!file::is_secure(&path).unwrap());
    assert_eq!(
        file::create(&path, false).unwrap_err().kind(),
        ErrorKind::Io
    );
}

#[test]
fn test_clone_transfers_exactly_the_source_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let from = dir.path().join("from");
    let to = dir.path().join("to");
    let content: Vec<u8> = (0..200_000u32).map(|i| (i % 251) as u8).collect();
    write_with_mode(&from, &content, 0o600);

    file::clone_file(&from, &to, false).unwrap();

    assert_eq!(fs::metadata(&to).unwrap().len(), content.len() as u64);
    assert_eq!(fs::read(&to).unwrap(), content);
}

#[test]
fn test_clone_of_empty_source_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let from = dir.path().join("empty");
    let to = dir.path().join("to");
    write_with_mode(&from, b"", 0o600);

    let err = file::clone_file(&from, &to, false).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn test_remove_nonexistent_path_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("never-created");

    remove(&path, false).unwrap();
    remove(&path, true).unwrap();
}

#[test]
fn test_size_of_2048_bytes_is_two_kib() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blob");
    fs::write(&path, vec![7u8; 2048]).unwrap();

    assert_eq!(size(&path).unwrap(), 2.0);
}

#[test]
fn test_metadata_queries_on_missing_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing");

    assert_eq!(size(&path).unwrap_err().kind(), ErrorKind::NotFound);
    assert_eq!(permission_bits(&path).unwrap_err().kind(), ErrorKind::NotFound);
    assert_eq!(file::is_secure(&path).unwrap_err().kind(), ErrorKind::NotFound);
}
