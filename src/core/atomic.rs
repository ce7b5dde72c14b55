//! Atomic publication primitives shared by every producer
//!
//! `write_atomic` leaves the target in one of exactly two observable states:
//! the previous content or the complete new content. The sequence is
//! write-temp, rename, chmod; rename is atomic within one filesystem, so a
//! concurrent reader never observes a truncated intermediate. `append_line`
//! is the separate contract for the append-only logs: one self-contained
//! newline-terminated record per call, single writer per target file.

use std::fs::{self, OpenOptions, Permissions};
use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use crate::error::{HubError, HubResult};

/// Owner read/write, nothing for group or other.
pub const FILE_MODE: u32 = 0o600;
/// Owner-only directory mode for namespace folders.
pub const DIR_MODE: u32 = 0o700;

/// Sibling temporary path used during an atomic write. Staying in the same
/// directory keeps the rename on one filesystem.
fn tmp_path(target: &Path) -> PathBuf {
    let mut name = target.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    target.with_file_name(name)
}

/// Write `bytes` to `path` with all-or-nothing visibility, then tighten the
/// result to owner-only access. On any failure the previous content of
/// `path` is untouched and the publish must be treated as failed.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> HubResult<()> {
    let tmp = tmp_path(path);

    fs::write(&tmp, bytes)
        .map_err(|e| HubError::FileWrite(format!("{}: {}", tmp.display(), e)))?;

    if let Err(e) = fs::rename(&tmp, path) {
        // Target untouched; don't leave the orphaned temp behind.
        let _ = fs::remove_file(&tmp);
        return Err(HubError::FileWrite(format!("{}: {}", path.display(), e)));
    }

    lock_owner_only(path)
}

/// Append one newline-terminated record to `path`, creating the file if
/// absent, and fix its permissions to owner-only after the append. The
/// record must not contain embedded newlines; interleaving protection across
/// concurrent appenders is a deployment contract, not enforced here.
pub fn append_line(path: &Path, line: &str) -> HubResult<()> {
    debug_assert!(!line.contains('\n'), "append records must be single lines");

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| HubError::FileWrite(format!("{}: {}", path.display(), e)))?;

    file.write_all(line.as_bytes())
        .and_then(|_| file.write_all(b"\n"))
        .map_err(|e| HubError::FileWrite(format!("{}: {}", path.display(), e)))?;
    drop(file);

    lock_owner_only(path)
}

/// Tighten a file to owner read/write only.
pub fn lock_owner_only(path: &Path) -> HubResult<()> {
    fs::set_permissions(path, Permissions::from_mode(FILE_MODE))
        .map_err(|e| HubError::FileWrite(format!("{}: {}", path.display(), e)))
}

/// Create a directory if absent and tighten it to owner-only access. An
/// existing directory has its permissions re-tightened rather than failing.
pub fn ensure_private_dir(path: &Path) -> HubResult<()> {
    fs::create_dir_all(path)
        .map_err(|e| HubError::DirectoryCreate(format!("{}: {}", path.display(), e)))?;
    fs::set_permissions(path, Permissions::from_mode(DIR_MODE))
        .map_err(|e| HubError::DirectoryCreate(format!("{}: {}", path.display(), e)))
}
