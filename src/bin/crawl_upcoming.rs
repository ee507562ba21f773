//! Crawls the upcoming-film list pages and prints one JSON record per line.
//!
//! Usage: `crawl_upcoming [comma-separated start URLs]`
//!
//! `UPCOMING_DOWNLOAD_DELAY_SECS` overrides the pause between fetches.

use std::env;
use std::io::{self, BufWriter, Write};
use std::ops::ControlFlow;
use std::time::Duration;

use tracing_subscriber::EnvFilter;
use upcoming_films::crawler::{CrawlConfig, Crawler, HttpFetcher};

const USER_AGENT: &str = concat!("upcoming-films/", env!("CARGO_PKG_VERSION"));

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(io::stderr)
        .init();

    let mut config = CrawlConfig::default();
    if let Some(urls) = env::args().nth(1) {
        config = config.with_start_urls_csv(&urls);
    }
    if let Ok(secs) = env::var("UPCOMING_DOWNLOAD_DELAY_SECS") {
        let secs: f64 = secs.trim().parse()?;
        config = config.with_download_delay(Duration::try_from_secs_f64(secs)?);
    }
    tracing::info!(start_urls = ?config.start_urls, "starting crawl");

    let crawler = Crawler::new(HttpFetcher::new(USER_AGENT)?, config);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut write_error: Option<io::Error> = None;

    let stats = crawler.run(|record| {
        let line = match serde_json::to_string(&record) {
            Ok(line) => line,
            Err(err) => {
                tracing::warn!(error = %err, "failed to serialize record");
                return ControlFlow::Continue(());
            }
        };
        match writeln!(out, "{line}") {
            Ok(()) => ControlFlow::Continue(()),
            Err(err) => {
                write_error = Some(err);
                ControlFlow::Break(())
            }
        }
    })?;

    if let Some(err) = write_error {
        return Err(err.into());
    }
    out.flush()?;

    eprintln!(
        "Crawled {} list pages and {} film pages: {} records, {} failed, {} skipped",
        stats.list_pages, stats.detail_pages, stats.records, stats.failed, stats.skipped
    );
    Ok(())
}
