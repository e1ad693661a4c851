// Snapshot store for reading and writing the cached user list.
// Writes are whole-file and atomic; reads parse the full file into memory.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::api::User;
use crate::error::ReadError;

/// Check if the snapshot file exists.
pub fn exists(path: &Path) -> bool {
    path.exists()
}

/// Result of a write-once store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stored {
    /// The bytes now live at the target path.
    Written,
    /// Something was already at the target path and was left untouched.
    AlreadyPresent,
}

/// Write raw bytes to `path` verbatim, never replacing an existing file.
///
/// The parent folder is created if needed. Content goes to a uniquely named temp
/// file beside the target and is linked into place only if the target is still
/// absent. The temp file is removed on every failure path.
pub fn write_bytes(path: &Path, bytes: &[u8]) -> io::Result<Stored> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir)?;

    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(bytes)?;
    temp.as_file().sync_all()?;

    match temp.persist_noclobber(path) {
        Ok(_) => Ok(Stored::Written),
        Err(e) if e.error.kind() == io::ErrorKind::AlreadyExists => Ok(Stored::AlreadyPresent),
        Err(e) => Err(e.error),
    }
}

/// Read and parse the snapshot into user records, preserving file order.
pub fn read_users(path: &Path) -> Result<Vec<User>, ReadError> {
    if !exists(path) {
        return Err(ReadError::Missing(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path)?;
    let users: Vec<User> = serde_json::from_str(&contents)?;

    if let Some(index) = users.iter().position(|u| u.first_name().is_none()) {
        return Err(ReadError::EmptyName { index });
    }

    Ok(users)
}
