//! Atomic writes and the move/copy/replace primitives used during integration
//!
//! None of the tree operations here are transactional: a failure halfway
//! through `move_replace` of a large bundle leaves whatever was already
//! moved in place.

use std::fs::{self, OpenOptions};
use std::io::Write;

use fs2::FileExt;

use crate::{Error, NormalizedPath, Result};

/// Write content atomically to a file with locking.
///
/// Writes to a temp file in the same directory, then renames over the target.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let native_path = path.to_native();

    if let Some(parent) = native_path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let temp_name = format!(
        ".{}.{}.tmp",
        native_path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = native_path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: native_path.clone(),
    })?;
    temp_file
        .write_all(content)
        .map_err(|e| Error::io(&temp_path, e))?;
    temp_file.sync_all().map_err(|e| Error::io(&temp_path, e))?;
    temp_file.unlock().map_err(|_| Error::LockFailed {
        path: native_path.clone(),
    })?;

    fs::rename(&temp_path, &native_path).map_err(|e| Error::io(&native_path, e))?;

    Ok(())
}

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Write text content to a file atomically.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}

/// Create a directory (and its parents) if it does not exist yet.
pub fn ensure_dir(path: &NormalizedPath) -> Result<()> {
    let native_path = path.to_native();
    fs::create_dir_all(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Delete a file or a whole directory tree. Missing paths are not an error.
pub fn remove_path(path: &NormalizedPath) -> Result<()> {
    let native_path = path.to_native();
    let result = match fs::symlink_metadata(&native_path) {
        Ok(meta) if meta.is_dir() => fs::remove_dir_all(&native_path),
        Ok(_) => fs::remove_file(&native_path),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => Err(e),
    };
    result.map_err(|e| Error::io(&native_path, e))
}

/// Move `src` to `dest`, deleting whatever already lives at `dest` first.
///
/// Falls back to copy-then-delete when a plain rename is refused, which
/// happens when the staging area sits on a different volume.
pub fn move_replace(src: &NormalizedPath, dest: &NormalizedPath) -> Result<()> {
    remove_path(dest)?;
    if let Some(parent) = dest.parent() {
        ensure_dir(&parent)?;
    }

    if fs::rename(src.to_native(), dest.to_native()).is_ok() {
        return Ok(());
    }

    tracing::debug!(src = %src, dest = %dest, "rename refused, copying instead");
    if src.is_dir() {
        copy_tree(src, dest)?;
    } else {
        copy_overwrite(src, dest)?;
    }
    remove_path(src)
}

/// Copy a single file to `dest`, overwriting an existing file.
pub fn copy_overwrite(src: &NormalizedPath, dest: &NormalizedPath) -> Result<()> {
    if let Some(parent) = dest.parent() {
        ensure_dir(&parent)?;
    }
    fs::copy(src.to_native(), dest.to_native()).map_err(|e| Error::io(dest.to_native(), e))?;
    Ok(())
}

/// Recursively copy a directory tree.
pub fn copy_tree(src: &NormalizedPath, dest: &NormalizedPath) -> Result<()> {
    ensure_dir(dest)?;
    for entry in list_dir(src)? {
        let name = entry.file_name().unwrap_or_default().to_string();
        let target = dest.join(&name);
        if entry.is_dir() {
            copy_tree(&entry, &target)?;
        } else {
            copy_overwrite(&entry, &target)?;
        }
    }
    Ok(())
}

/// List the direct children of a directory, sorted by name.
pub fn list_dir(path: &NormalizedPath) -> Result<Vec<NormalizedPath>> {
    let native_path = path.to_native();
    if !native_path.is_dir() {
        return Err(Error::NotADirectory { path: native_path });
    }

    let mut entries = Vec::new();
    for entry in fs::read_dir(&native_path).map_err(|e| Error::io(&native_path, e))? {
        let entry = entry.map_err(|e| Error::io(&native_path, e))?;
        entries.push(NormalizedPath::new(entry.path()));
    }
    entries.sort();
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_remove_missing_path_is_ok() {
        let temp = TempDir::new().unwrap();
        let missing = NormalizedPath::new(temp.path()).join("nope");
        remove_path(&missing).unwrap();
    }

    #[test]
    fn test_list_dir_rejects_file() {
        let temp = TempDir::new().unwrap();
        let file = NormalizedPath::new(temp.path()).join("a.txt");
        write_text(&file, "x").unwrap();
        assert!(matches!(list_dir(&file), Err(Error::NotADirectory { .. })));
    }
}
