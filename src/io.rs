//! Whole-file convenience I/O
//!
//! Each function opens, acts and closes internally. The text search and
//! replace operations load the entire file into memory; they are only meant
//! for files that fit comfortably.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use regex::bytes::Regex;

use crate::line_file::LineFile;
use crate::{Error, Result};

/// Permission bits applied by [`write_bytes`] when a caller passes a mode of
/// zero.
pub const DEFAULT_WRITE_MODE: u32 = 0o666;

/// Read a file's entire contents as bytes, untrimmed.
pub fn read_bytes(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    fs::read(path).map_err(|e| Error::io(path, e))
}

/// Create or overwrite the file at `path` with `data`.
///
/// A `mode` of zero selects [`DEFAULT_WRITE_MODE`]. On non-Unix platforms the
/// permission bits are ignored.
pub fn write_bytes(path: impl AsRef<Path>, data: &[u8], mode: u32) -> Result<()> {
    let path = path.as_ref();
    let mode = if mode == 0 { DEFAULT_WRITE_MODE } else { mode };

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;

    let mut file = options.open(path).map_err(|e| Error::io(path, e))?;
    file.write_all(data).map_err(|e| Error::io(path, e))
}

/// Append `line` and a newline terminator to the file at `path`, creating it
/// if absent. A `mode` of zero selects the default permission bits.
pub fn append_line(path: impl AsRef<Path>, line: &str, mode: u32) -> Result<()> {
    let mut file = LineFile::open(path, mode)?;
    file.write_line(line)
}

/// Whether the file's full contents match `pattern`.
pub fn contains_text(path: impl AsRef<Path>, pattern: &str) -> Result<bool> {
    let path = path.as_ref();
    let regex = Regex::new(pattern).map_err(|e| Error::pattern(pattern, e))?;
    let contents = fs::read(path).map_err(|e| Error::io(path, e))?;
    Ok(regex.is_match(&contents))
}

/// Replace every match of `pattern` in the file's full contents with
/// `replacement` and rewrite the file.
pub fn find_replace(path: impl AsRef<Path>, pattern: &str, replacement: &str) -> Result<()> {
    let path = path.as_ref();
    let regex = Regex::new(pattern).map_err(|e| Error::pattern(pattern, e))?;
    let contents = fs::read(path).map_err(|e| Error::io(path, e))?;
    let replaced = regex.replace_all(&contents, replacement.as_bytes());
    fs::write(path, replaced.as_ref()).map_err(|e| Error::io(path, e))
}
