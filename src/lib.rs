//! Thin convenience wrappers over native filesystem and HTTP primitives.
//!
//! Every operation is a direct, synchronous pass-through to an OS or HTTP
//! call: the first error encountered is returned verbatim, nothing retries,
//! and no operation is safe for concurrent use against the same path without
//! external coordination. Operations that read a file's full contents
//! (search, replace, the line helpers) hold the whole file in memory and are
//! scoped to files that fit.

pub mod download;
pub mod error;
pub mod io;
pub mod line_file;
pub mod ops;
pub mod path;
pub mod query;

pub use download::{DEFAULT_USER_AGENT, HeaderMap, download_file};
pub use error::{Error, Result};
pub use line_file::{LineFile, contents_of, remove_first_line_from};
