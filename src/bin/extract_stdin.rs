//! Reads one film page from stdin and prints its record as JSON to stdout.
//!
//! Prints `null` when the page has no infobox.

use std::io::{self, Read};

use tracing_subscriber::EnvFilter;
use upcoming_films::extract_html;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(io::stderr)
        .init();

    let mut html = String::new();
    if let Err(err) = io::stdin().read_to_string(&mut html) {
        tracing::error!(error = %err, "failed to read from stdin");
        std::process::exit(1);
    }

    let record = extract_html(&html);
    if record.is_none() {
        tracing::info!("no infobox found");
    }

    println!("{}", serde_json::to_string(&record).unwrap_or_else(|_| "null".to_string()));
}
