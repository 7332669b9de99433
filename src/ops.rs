//! Filesystem mutation: copy, rename, delete, create
//!
//! Direct pass-throughs to OS primitives with first-error-wins propagation.
//! Deletion by pattern is the one place shell-glob syntax applies; everything
//! else in the crate matches with regular expressions.

use std::fs;
use std::path::Path;

use crate::path::bare_dir_path;
use crate::query;
use crate::{Error, Result};

/// Permission bits applied by [`create_dir`] when a caller passes a mode of
/// zero.
pub const DEFAULT_DIR_MODE: u32 = 0o744;

/// Recursively create the directory at `path`.
///
/// A `mode` of zero selects [`DEFAULT_DIR_MODE`]. On non-Unix platforms the
/// permission bits are ignored.
pub fn create_dir(path: impl AsRef<Path>, mode: u32) -> Result<()> {
    let path = path.as_ref();
    let mode = if mode == 0 { DEFAULT_DIR_MODE } else { mode };

    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;

    builder.create(path).map_err(|e| Error::io(path, e))
}

/// Delete a single file.
pub fn delete_file(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    fs::remove_file(path).map_err(|e| Error::io(path, e))
}

/// Delete every file matching a shell-glob `pattern`, stopping at the first
/// failure.
pub fn delete_matching(pattern: &str) -> Result<()> {
    tracing::debug!(pattern, "Deleting files matching glob");
    let paths = glob::glob(pattern).map_err(|e| Error::InvalidGlob {
        pattern: pattern.to_string(),
        source: e,
    })?;
    for entry in paths {
        let path = entry.map_err(|e| {
            let path = e.path().to_path_buf();
            Error::io(path, e.into_error())
        })?;
        fs::remove_file(&path).map_err(|e| Error::io(&path, e))?;
    }
    Ok(())
}

/// Recursively delete the directory tree at `path`.
pub fn delete_dir(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "Deleting directory tree");
    fs::remove_dir_all(path).map_err(|e| Error::io(path, e))
}

/// Rename `source` to `target`, overwriting an existing target.
///
/// A rename onto itself (after trailing-separator stripping) is a no-op. The
/// existing target is deleted first rather than relying on the platform's
/// rename-over semantics; on Windows a case-only rename goes through a
/// temporary name instead, since the "existing" target there is the source.
pub fn rename_file(source: &str, target: &str) -> Result<()> {
    let source = bare_dir_path(source);
    let target = bare_dir_path(target);
    if source == target {
        return Ok(());
    }
    tracing::debug!(%source, %target, "Renaming file");

    if cfg!(windows) && source.to_lowercase() == target.to_lowercase() {
        let temp = format!("{target}.tmp");
        fs::rename(&source, &temp).map_err(|e| Error::io(&source, e))?;
        return fs::rename(&temp, &target).map_err(|e| Error::io(&temp, e));
    }

    if query::file_exists(&target) {
        delete_file(&target)?;
    }
    fs::rename(&source, &target).map_err(|e| Error::io(&source, e))
}

/// Move `source` to `target`. Alias for [`rename_file`].
pub fn move_file(source: &str, target: &str) -> Result<()> {
    rename_file(source, target)
}

/// Copy one regular file's bytes to `target`, returning the number of bytes
/// copied. Errors if `source` is not a regular file.
pub fn copy_file(source: impl AsRef<Path>, target: impl AsRef<Path>) -> Result<u64> {
    let source = source.as_ref();
    let target = target.as_ref();
    let metadata = fs::metadata(source).map_err(|e| Error::io(source, e))?;
    if !metadata.is_file() {
        return Err(Error::NotRegularFile {
            path: source.to_path_buf(),
        });
    }
    fs::copy(source, target).map_err(|e| Error::io(target, e))
}
