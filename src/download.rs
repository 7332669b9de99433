//! Single-file HTTP download

use std::fs::File;
use std::path::Path;

use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;

pub use reqwest::header::HeaderMap;

use crate::{Error, Result};

/// Browser-like default so hosts that reject unknown clients still answer.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Fedora; Linux x86_64; rv:52.0) Gecko/20100101 Firefox/52.0";

/// Issue one blocking GET to `url` and stream the response body to `target`.
///
/// When `headers` is `None` the request carries [`DEFAULT_USER_AGENT`]; a
/// supplied header map fully replaces that default, with no merging. A
/// non-success status is an error, and the target file is only created after
/// a successful response so a failed download never leaves an empty file
/// behind. No retries, no redirect policy beyond the client default.
pub fn download_file(url: &str, target: impl AsRef<Path>, headers: Option<HeaderMap>) -> Result<()> {
    let target = target.as_ref();
    tracing::debug!(url, target = %target.display(), "Downloading file");

    let client = Client::new();
    let request = match headers {
        Some(headers) => client.get(url).headers(headers),
        None => client.get(url).header(USER_AGENT, DEFAULT_USER_AGENT),
    };
    let mut response = request.send().map_err(|e| Error::Http {
        url: url.to_string(),
        source: e,
    })?;
    if !response.status().is_success() {
        return Err(Error::HttpStatus {
            url: url.to_string(),
            status: response.status().as_u16(),
        });
    }

    let mut file = File::create(target).map_err(|e| Error::io(target, e))?;
    response.copy_to(&mut file).map_err(|e| Error::Http {
        url: url.to_string(),
        source: e,
    })?;
    Ok(())
}
