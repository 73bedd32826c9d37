// src/store.rs
//! On-disk cache of the last fetched page: `{ url, status, body }` as JSON.
//! Only the raw body and status are kept, so a cached run parses exactly the
//! bytes the network run parsed.

use std::{fs, io, path::Path};

use tracing::debug;

use crate::core::net::Response;
use crate::error::{Error, Result};
use crate::file::ensure_parent;

pub type CachedResponse = Response;

/// `Ok(None)` when there is no cache file yet.
pub fn load(path: &Path) -> Result<Option<CachedResponse>> {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(Error::io(path, e)),
    };
    let cached = serde_json::from_str(&text)
        .map_err(|source| Error::Cache { path: path.to_path_buf(), source })?;
    debug!(path = %path.display(), "cache hit");
    Ok(Some(cached))
}

pub fn save(path: &Path, resp: &CachedResponse) -> Result<()> {
    ensure_parent(path)?;
    let json = serde_json::to_string_pretty(resp)
        .map_err(|source| Error::Cache { path: path.to_path_buf(), source })?;
    fs::write(path, json).map_err(|e| Error::io(path, e))?;
    debug!(path = %path.display(), bytes = resp.body.len(), "cache written");
    Ok(())
}
