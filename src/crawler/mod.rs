//! Crawl controller.
//!
//! Owns the frontier of URLs, fetches each through a [`Fetcher`], routes
//! list pages to link discovery and film pages to record extraction, and
//! hands records to a caller-supplied sink. Pages are fetched one at a time
//! with a fixed pause in between; a page that fails to fetch is logged and
//! skipped without affecting the rest of the crawl.

use std::collections::{HashSet, VecDeque};
use std::ops::ControlFlow;
use std::thread;

use tracing::{debug, info, warn};
use url::Url;

use crate::dom;
use crate::result::Record;
use crate::{discover_with_options, extract_with_options, Result};

mod config;
mod fetch;

pub use config::{CrawlConfig, DEFAULT_DOWNLOAD_DELAY, DEFAULT_START_URLS};
#[cfg(feature = "http")]
pub use fetch::HttpFetcher;
pub use fetch::{Fetcher, StaticFetcher};

/// What a fetched page is expected to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRole {
    /// A "<year> in film" page listing many films.
    List,
    /// A single film's page.
    Detail,
}

/// Counters reported at the end of a crawl.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrawlStats {
    /// List pages fetched and scanned for links.
    pub list_pages: usize,
    /// Film pages fetched.
    pub detail_pages: usize,
    /// Records handed to the sink.
    pub records: usize,
    /// URLs dropped unfetched (off-domain or already visited).
    pub skipped: usize,
    /// URLs whose fetch failed.
    pub failed: usize,
}

/// Sequential crawl controller.
#[derive(Debug, Clone)]
pub struct Crawler<F> {
    fetcher: F,
    config: CrawlConfig,
}

impl<F: Fetcher> Crawler<F> {
    /// Create a crawler over `fetcher` with `config`.
    pub fn new(fetcher: F, config: CrawlConfig) -> Self {
        Self { fetcher, config }
    }

    /// The active configuration.
    pub fn config(&self) -> &CrawlConfig {
        &self.config
    }

    /// Crawl from the configured start pages, passing every record to `sink`.
    ///
    /// The crawl ends early, without further fetches, once `sink` returns
    /// [`ControlFlow::Break`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidUrl`] if a start URL does not parse.
    /// Fetch failures on individual pages are counted, not returned.
    pub fn run<S>(&self, mut sink: S) -> Result<CrawlStats>
    where
        S: FnMut(Record) -> ControlFlow<()>,
    {
        let mut frontier: VecDeque<(Url, PageRole)> = self
            .config
            .start_targets()?
            .into_iter()
            .map(|url| (url, PageRole::List))
            .collect();

        let mut visited: HashSet<String> = HashSet::new();
        let mut stats = CrawlStats::default();
        let mut first_fetch = true;

        while let Some((url, role)) = frontier.pop_front() {
            if !self.config.is_allowed(&url) {
                debug!(url = %url, "dropping off-domain URL");
                stats.skipped += 1;
                continue;
            }
            if !visited.insert(url.as_str().to_string()) {
                debug!(url = %url, "already visited");
                stats.skipped += 1;
                continue;
            }

            if !first_fetch && !self.config.download_delay.is_zero() {
                thread::sleep(self.config.download_delay);
            }
            first_fetch = false;

            let html = match self.fetcher.fetch(&url) {
                Ok(html) => html,
                Err(err) => {
                    warn!(url = %url, error = %err, "fetch failed, skipping page");
                    stats.failed += 1;
                    continue;
                }
            };

            match role {
                PageRole::List => {
                    stats.list_pages += 1;
                    let links = self.process_list_page(&html);
                    info!(url = %url, links = links.len(), "scanned list page");
                    frontier.extend(links.into_iter().map(|u| (u, PageRole::Detail)));
                }
                PageRole::Detail => {
                    stats.detail_pages += 1;
                    match self.process_detail_page(&html) {
                        Some(record) => {
                            stats.records += 1;
                            if sink(record).is_break() {
                                info!(url = %url, "sink requested stop, ending crawl");
                                break;
                            }
                        }
                        None => debug!(url = %url, "no infobox, nothing extracted"),
                    }
                }
            }
        }

        info!(
            list_pages = stats.list_pages,
            detail_pages = stats.detail_pages,
            records = stats.records,
            skipped = stats.skipped,
            failed = stats.failed,
            "crawl finished"
        );
        Ok(stats)
    }

    /// Crawl and collect every record in crawl order.
    ///
    /// # Errors
    ///
    /// Same as [`Crawler::run`].
    pub fn collect_records(&self) -> Result<Vec<Record>> {
        let mut records = Vec::new();
        self.run(|record| {
            records.push(record);
            ControlFlow::Continue(())
        })?;
        Ok(records)
    }

    fn process_list_page(&self, html: &str) -> Vec<Url> {
        let doc = dom::parse(html);
        discover_with_options(&doc, &self.config.options)
            .into_iter()
            .map(Into::into)
            .collect()
    }

    fn process_detail_page(&self, html: &str) -> Option<Record> {
        let doc = dom::parse(html);
        extract_with_options(&doc, &self.config.options)
    }
}
