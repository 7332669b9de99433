//! Line-oriented access to a single open file
//!
//! A [`LineFile`] owns one file opened read+write+append and hides offset
//! management behind line-level operations. The read operations load the
//! entire file into memory; they are not suitable for files that do not fit.
//! No locking is provided: concurrent writers need external coordination.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Permission bits applied when a caller passes a mode of zero.
pub const DEFAULT_FILE_MODE: u32 = 0o644;

/// An exclusive handle over one open file for sequential line I/O.
///
/// The handle cannot exist in an unopened state: [`LineFile::open`] either
/// yields a usable handle or an error, and the underlying file is released
/// when the handle is dropped or explicitly [`close`](LineFile::close)d.
#[derive(Debug)]
pub struct LineFile {
    file: File,
    path: PathBuf,
}

impl LineFile {
    /// Open (creating if necessary) the file at `path` for read/write/append.
    ///
    /// A `mode` of zero selects [`DEFAULT_FILE_MODE`]. On non-Unix platforms
    /// the permission bits are ignored.
    pub fn open(path: impl AsRef<Path>, mode: u32) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let mode = if mode == 0 { DEFAULT_FILE_MODE } else { mode };

        let mut options = OpenOptions::new();
        options.read(true).append(true).create(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(mode);
        }
        #[cfg(not(unix))]
        let _ = mode;

        let file = options.open(&path).map_err(|e| Error::io(&path, e))?;
        Ok(Self { file, path })
    }

    /// The path this handle was opened with.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append raw bytes. Writes always land at the end of the file because
    /// the handle is opened in append mode.
    pub fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.file
            .write_all(data)
            .map_err(|e| Error::io(&self.path, e))
    }

    /// Append string data without a terminator.
    pub fn write_str(&mut self, text: &str) -> Result<()> {
        self.write_bytes(text.as_bytes())
    }

    /// Append `line` followed by a single `\n` terminator.
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        self.write_bytes(line.as_bytes())?;
        self.write_bytes(b"\n")
    }

    /// Read the entire file, trimming at most one trailing newline.
    pub fn contents(&mut self) -> Result<Vec<u8>> {
        let mut buffer = self.read_all()?;
        if buffer.last() == Some(&b'\n') {
            buffer.pop();
        }
        Ok(buffer)
    }

    /// Read the first line, without its terminator.
    ///
    /// A file that contains no newline is treated as a single line and
    /// returned whole. The read position is reset to the start afterward so
    /// the handle remains usable for further sequential reads.
    pub fn first_line(&mut self) -> Result<Vec<u8>> {
        let buffer = self.read_all()?;
        self.seek_start()?;
        let line = match buffer.iter().position(|b| *b == b'\n') {
            Some(end) => buffer[..end].to_vec(),
            None => buffer,
        };
        Ok(line)
    }

    /// Remove the first line by rewriting the remainder of the file.
    ///
    /// Reads the whole file, drops everything through the first newline,
    /// truncates to zero, writes the remaining bytes back from the start and
    /// flushes before returning. O(file size); not safe against a concurrent
    /// writer between the read and the truncate.
    pub fn remove_first_line(&mut self) -> Result<()> {
        let buffer = self.read_all()?;
        let rest = match buffer.iter().position(|b| *b == b'\n') {
            Some(end) => &buffer[end + 1..],
            // A single unterminated line is removed whole.
            None => &[][..],
        };
        self.file
            .set_len(0)
            .map_err(|e| Error::io(&self.path, e))?;
        self.seek_start()?;
        self.file
            .write_all(rest)
            .map_err(|e| Error::io(&self.path, e))?;
        self.file
            .sync_all()
            .map_err(|e| Error::io(&self.path, e))?;
        self.seek_start()
    }

    /// Release the handle. Equivalent to dropping it; provided so call sites
    /// can make the end of the file's lifetime explicit.
    pub fn close(self) {}

    fn read_all(&mut self) -> Result<Vec<u8>> {
        let size = self
            .file
            .metadata()
            .map_err(|e| Error::io(&self.path, e))?
            .len();
        self.seek_start()?;
        let mut buffer = Vec::with_capacity(size as usize);
        self.file
            .read_to_end(&mut buffer)
            .map_err(|e| Error::io(&self.path, e))?;
        Ok(buffer)
    }

    fn seek_start(&mut self) -> Result<()> {
        self.file
            .seek(SeekFrom::Start(0))
            .map_err(|e| Error::io(&self.path, e))?;
        Ok(())
    }
}

/// Read a file's entire contents, trimming at most one trailing newline.
///
/// Opens, reads and closes internally.
pub fn contents_of(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let mut file = LineFile::open(path, 0)?;
    file.contents()
}

/// Remove the first line from the file at `path`.
///
/// Opens, rewrites and closes internally.
pub fn remove_first_line_from(path: impl AsRef<Path>) -> Result<()> {
    let mut file = LineFile::open(path, 0)?;
    file.remove_first_line()
}
