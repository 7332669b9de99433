//! Path-string helpers
//!
//! Pure string logic over `/` and `\` separated paths; nothing here touches
//! the filesystem except the process-level lookups at the bottom.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Format a directory path with exactly one trailing separator.
///
/// Idempotent: any number of trailing separators (including zero) collapses
/// to one.
pub fn normalized_dir_path(path: &str) -> String {
    format!("{}/", bare_dir_path(path))
}

/// Strip all trailing separators from a path.
pub fn bare_dir_path(path: &str) -> String {
    path.trim_end_matches(is_separator).to_string()
}

/// The last component of a path.
pub fn file_name_from_path(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// The extension of the last component, including the leading dot.
///
/// A leading dot is treated as part of a hidden file's name, not as an
/// extension separator, so `".bashrc"` has no extension.
pub fn file_extension(path: &str) -> String {
    let name = file_name_from_path(path);
    match name.rfind('.') {
        Some(idx) if idx > 0 => name[idx..].to_string(),
        _ => String::new(),
    }
}

/// The file name of a path minus one trailing extension.
///
/// Strips exactly one `.`-delimited suffix: `"my_file.eng.txt"` yields
/// `"my_file.eng"`.
pub fn base_file_name(path: &str) -> String {
    let name = file_name_from_path(&bare_dir_path(path));
    match name.rfind('.') {
        Some(idx) if idx > 0 => name[..idx].to_string(),
        _ => name,
    }
}

/// Everything except the last component of a path; `"."` when there is no
/// parent.
pub fn parent_dir(path: &str) -> String {
    let bare = bare_dir_path(path);
    let parent = Path::new(&bare)
        .parent()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default();
    if parent.is_empty() {
        ".".to_string()
    } else {
        parent
    }
}

/// The containing directory of a path, with its trailing separator.
///
/// Empty when the path has a single component.
pub fn base_dir(path: &str) -> String {
    let bare = bare_dir_path(path);
    match bare.rfind(is_separator) {
        Some(idx) => bare[..=idx].to_string(),
        None => String::new(),
    }
}

/// The last path segment, after stripping the containing directory prefix.
pub fn current_dir_name(path: &str) -> String {
    let base = base_dir(path);
    path.strip_prefix(&base).unwrap_or(path).to_string()
}

/// The platform user cache directory, for program data that is cheap to
/// regenerate.
pub fn default_cache_dir() -> Result<PathBuf> {
    dirs::cache_dir().ok_or(Error::CacheDirUnavailable)
}

/// The parent of the process working directory.
pub fn working_dir_parent() -> Result<PathBuf> {
    let cwd = std::env::current_dir().map_err(|e| Error::io(".", e))?;
    if let Some(parent) = cwd.parent() {
        return Ok(parent.to_path_buf());
    }
    Ok(cwd)
}
