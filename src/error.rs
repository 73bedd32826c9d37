// src/error.rs
use std::path::PathBuf;

use crate::scrape::ScrapeError;

/// Run-level failures. Anything here halts the run before an output file is
/// written.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("HTTP request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("received status code {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("cache file {path} is unreadable: {source}")]
    Cache {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV serialization failed: {0}")]
    Csv(#[from] ::csv::Error),

    #[error(transparent)]
    Scrape(#[from] ScrapeError),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
