//! Existence checks and pattern-matched directory listings
//!
//! Listing filters are regular expressions applied to entry names, not shell
//! globs. Matched directory names carry a trailing `/` so callers can tell
//! the two kinds apart without another stat.

use std::fs;
use std::path::Path;

use regex::Regex;
use walkdir::WalkDir;

use crate::path::normalized_dir_path;
use crate::{Error, Result};

/// Whether a file exists at `path`. Any stat failure reads as absent.
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}

/// Whether a directory exists at `path`.
pub fn dir_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}

/// Whether `path` is a regular file. Errors if the path cannot be stat'd.
pub fn is_file(path: impl AsRef<Path>) -> Result<bool> {
    let path = path.as_ref();
    let metadata = fs::metadata(path).map_err(|e| Error::io(path, e))?;
    Ok(metadata.is_file())
}

/// Whether `path` is a directory. False on any error.
pub fn is_dir(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_dir()
}

/// Whether the directory at `path` has no entries.
pub fn is_dir_empty(path: impl AsRef<Path>) -> Result<bool> {
    let path = path.as_ref();
    let mut entries = fs::read_dir(path).map_err(|e| Error::io(path, e))?;
    match entries.next() {
        None => Ok(true),
        Some(Ok(_)) => Ok(false),
        Some(Err(e)) => Err(Error::io(path, e)),
    }
}

/// The size of the file at `path` in bytes.
pub fn file_size(path: impl AsRef<Path>) -> Result<u64> {
    let path = path.as_ref();
    let metadata = fs::metadata(path).map_err(|e| Error::io(path, e))?;
    Ok(metadata.len())
}

/// List immediate child files whose names match `pattern`.
pub fn list_files(dir: impl AsRef<Path>, pattern: &str) -> Result<Vec<String>> {
    list_entries(dir, &[pattern], true, false)
}

/// List immediate child directories whose names match `pattern`.
pub fn list_dirs(dir: impl AsRef<Path>, pattern: &str) -> Result<Vec<String>> {
    list_entries(dir, &[pattern], false, true)
}

/// List immediate children of `dir` whose names match any of `patterns`.
///
/// Returns bare entry names sorted lexicographically; directory names end in
/// `/`. Malformed patterns surface as [`Error::InvalidPattern`].
pub fn list_entries(
    dir: impl AsRef<Path>,
    patterns: &[&str],
    include_files: bool,
    include_dirs: bool,
) -> Result<Vec<String>> {
    let regexes = compile_patterns(patterns)?;
    list_with(dir.as_ref(), &regexes, include_files, include_dirs)
}

/// Find matching content under `dir`, returned as fully-qualified paths.
///
/// The shallow form qualifies each match with the normalized `dir` prefix;
/// the recursive form walks the tree and applies the same per-directory
/// matching at every level, root included.
pub fn find_matching(
    dir: impl AsRef<Path>,
    patterns: &[&str],
    include_files: bool,
    include_dirs: bool,
    recursive: bool,
) -> Result<Vec<String>> {
    let dir = dir.as_ref();
    let regexes = compile_patterns(patterns)?;
    let mut results = Vec::new();

    if recursive {
        for entry in WalkDir::new(dir) {
            let entry = entry.map_err(|e| walk_error(dir, e))?;
            if !entry.file_type().is_dir() {
                continue;
            }
            let prefix = normalized_dir_path(&entry.path().to_string_lossy());
            for name in list_with(entry.path(), &regexes, include_files, include_dirs)? {
                results.push(format!("{prefix}{name}"));
            }
        }
    } else {
        let prefix = normalized_dir_path(&dir.to_string_lossy());
        for name in list_with(dir, &regexes, include_files, include_dirs)? {
            results.push(format!("{prefix}{name}"));
        }
    }
    Ok(results)
}

fn compile_patterns(patterns: &[&str]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|p| Regex::new(p).map_err(|e| Error::pattern(*p, e)))
        .collect()
}

fn list_with(
    dir: &Path,
    regexes: &[Regex],
    include_files: bool,
    include_dirs: bool,
) -> Result<Vec<String>> {
    let mut names = Vec::new();
    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !regexes.iter().any(|r| r.is_match(&name)) {
            continue;
        }
        let file_type = entry
            .file_type()
            .map_err(|e| Error::io(entry.path(), e))?;
        if file_type.is_dir() && include_dirs {
            names.push(format!("{name}/"));
        } else if !file_type.is_dir() && include_files {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

fn walk_error(dir: &Path, err: walkdir::Error) -> Error {
    let path = err
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| dir.to_path_buf());
    let source = err
        .into_io_error()
        .unwrap_or_else(|| std::io::Error::other("directory walk failed"));
    Error::io(path, source)
}
