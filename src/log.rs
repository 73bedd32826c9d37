// src/log.rs
use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt::time::Uptime};

use crate::config::{LogOptions, consts::LOG_DIRECTIVE};
use crate::error::{Error, Result};
use crate::file::ensure_parent;

/// Install the global `tracing` subscriber.
///
/// Lines carry the time elapsed since start. The filter comes from
/// `opts.directive` only; a bad directive falls back to `info`. Calling this
/// twice is harmless: the first subscriber stays.
pub fn init(opts: &LogOptions) -> Result<()> {
    let filter = EnvFilter::try_new(&opts.directive)
        .unwrap_or_else(|_| EnvFilter::new(LOG_DIRECTIVE));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(Uptime::default())
        .with_target(false);

    let installed = match &opts.debug_file {
        Some(path) => {
            ensure_parent(path)?;
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| Error::io(path, e))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    if installed.is_err() {
        tracing::debug!("subscriber already installed");
    }
    Ok(())
}
