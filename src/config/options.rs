// src/config/options.rs
use std::path::{Path, PathBuf};
use super::consts::*;

/// How the batch driver reacts to a record that fails extraction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExtractMode {
    /// Skip the broken record, report it, keep the rest.
    #[default]
    Isolate,
    /// Any broken record aborts the whole batch; nothing is written.
    Strict,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogOptions {
    /// `tracing_subscriber::EnvFilter` directive, e.g. "info" or "auto_scrape=debug".
    pub directive: String,
    /// Append log lines here instead of stderr.
    pub debug_file: Option<PathBuf>,
}

impl LogOptions {
    pub fn with_debug_file(mut self, path: impl AsRef<Path>) -> Self {
        self.debug_file = Some(path.as_ref().to_path_buf());
        self
    }
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            directive: s!(LOG_DIRECTIVE),
            debug_file: None,
        }
    }
}

/// Everything a run needs. Defaults reproduce the fixed page, cache file and
/// output file of the original scraper.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub url: String,
    pub cache_path: PathBuf,
    pub out_path: PathBuf,
    pub mode: ExtractMode,
    pub log: LogOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: s!(DEFAULT_URL),
            cache_path: PathBuf::from(DEFAULT_CACHE_FILE),
            out_path: PathBuf::from(DEFAULT_OUT_FILE),
            mode: ExtractMode::default(),
            log: LogOptions::default(),
        }
    }
}

impl Config {
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_cache_path(mut self, path: impl AsRef<Path>) -> Self {
        self.cache_path = path.as_ref().to_path_buf();
        self
    }

    pub fn with_out_path(mut self, path: impl AsRef<Path>) -> Self {
        self.out_path = path.as_ref().to_path_buf();
        self
    }

    pub fn with_mode(mut self, mode: ExtractMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_debug_file(mut self, path: impl AsRef<Path>) -> Self {
        self.log = self.log.with_debug_file(path);
        self
    }

    pub fn strict(self) -> Self {
        self.with_mode(ExtractMode::Strict)
    }
}
