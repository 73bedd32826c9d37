// src/bin/cli.rs
use auto_scrape::{config::Config, log, progress::LogProgress, runner};
use color_eyre::eyre::WrapErr;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cfg = Config::default();
    log::init(&cfg.log)?;

    let mut progress = LogProgress::default();
    let summary = runner::run(&cfg, Some(&mut progress))
        .wrap_err_with(|| format!("scraping {} failed", cfg.url))?;

    println!("{summary}");
    Ok(())
}
