// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod specs;

pub mod csv;
pub mod error;
pub mod file;
pub mod log;
pub mod progress;
pub mod runner;
pub mod scrape;
pub mod store;

pub use config::{Config, ExtractMode};
pub use error::{Error, Result};
pub use runner::{run, RunSummary};
pub use specs::cars::Record;
