// src/runner.rs
use std::fmt;
use std::path::PathBuf;

use tracing::info;

use crate::{
    config::Config,
    core::{html, net::{self, Response}},
    error::Result,
    file,
    progress::Progress,
    scrape::{self, Batch},
    store,
};

/// The page to parse and where it came from.
pub struct Page {
    pub response: Response,
    pub from_cache: bool,
}

/// Summary of what was produced.
pub struct RunSummary {
    pub out_path: PathBuf,
    pub batch: Batch,
    pub from_cache: bool,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "total entries {}", self.batch.len())?;
        if let Some(first) = self.batch.first() {
            writeln!(f, "first: {first}")?;
        }
        if let Some(last) = self.batch.last() {
            writeln!(f, "last:  {last}")?;
        }
        if !self.batch.failures.is_empty() {
            writeln!(f, "skipped {} car block(s):", self.batch.failures.len())?;
            for fail in &self.batch.failures {
                writeln!(f, "  #{}: {}", fail.index, fail.error)?;
            }
        }
        write!(f, "Wrote {}", self.out_path.display())
    }
}

/// Cached copy if the cache file exists, otherwise a live GET. Successful
/// live responses are written to the cache; failed ones are not.
pub fn load_or_fetch(cfg: &Config) -> Result<Page> {
    if let Some(response) = store::load(&cfg.cache_path)? {
        info!("Loading cached {}", cfg.cache_path.display());
        return Ok(Page { response, from_cache: true });
    }

    let response = net::http_get(&cfg.url)?;
    if response.is_ok() {
        info!("Writing into cached {}", cfg.cache_path.display());
        store::save(&cfg.cache_path, &response)?;
    }
    Ok(Page { response, from_cache: false })
}

/// Top-level run: load or fetch, require status 200, extract, write.
/// Nothing is written unless every step succeeds.
pub fn run(cfg: &Config, progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    let page = load_or_fetch(cfg)?;
    page.response.ensure_ok()?;

    let mut summary = run_document(&page.response.body, cfg, progress)?;
    summary.from_cache = page.from_cache;
    Ok(summary)
}

/// Parse, extract and write an in-memory page.
pub fn run_document(
    markup: &str,
    cfg: &Config,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let doc = html::parse_document(markup);
    let batch = scrape::collect_cars(&doc, cfg.mode, progress)?;
    let out_path = file::write_records(&cfg.out_path, &batch.records)?;

    info!(
        records = batch.len(),
        skipped = batch.failures.len(),
        "total entries {}",
        batch.len()
    );

    Ok(RunSummary { out_path, batch, from_cache: false })
}
