//! Batch orchestration.
//!
//! Reads the URL list, processes each URL in input order with a polite delay between
//! requests, and writes every export. One failing URL never stops the batch.

mod task;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use log::info;

use crate::app::{log_progress, read_url_list};
use crate::config::Config;
use crate::export::{write_all, ExportPaths, PageRecord};
use crate::fetch::{FetchConfig, Fetcher};

pub use task::process_url;

/// Results of a batch run.
#[derive(Debug, Clone)]
pub struct BatchReport {
    /// One record per processed URL, in input order
    pub records: Vec<PageRecord>,
    /// Number of URLs processed
    pub total_urls: usize,
    /// Number of URLs fetched and extracted
    pub successful: usize,
    /// Number of URLs that failed
    pub failed: usize,
    /// Directory holding the exports
    pub output_dir: PathBuf,
    /// Files written
    pub exports: ExportPaths,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

/// Processes URLs sequentially, sleeping `delay` between consecutive requests.
pub async fn process_urls(fetcher: &Fetcher, urls: &[String], delay: Duration) -> Vec<PageRecord> {
    let start_time = Instant::now();
    let total = urls.len();
    let mut records = Vec::with_capacity(total);

    for (i, url) in urls.iter().enumerate() {
        records.push(process_url(fetcher, url).await);
        log_progress(i + 1, total, start_time);

        if i + 1 < total && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
    records
}

/// Runs a batch with the provided configuration.
///
/// # Errors
///
/// Returns an error if the URL list cannot be read or is empty, the HTTP client
/// cannot be built, or the exports cannot be written. Individual fetch failures are
/// recorded as notes instead.
///
/// # Example
///
/// ```no_run
/// use page_text::{run_batch, Config};
/// use std::path::PathBuf;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config {
///     file: PathBuf::from("urls.txt"),
///     ..Default::default()
/// };
/// let report = run_batch(config).await?;
/// println!("{} of {} pages extracted", report.successful, report.total_urls);
/// # Ok(())
/// # }
/// ```
pub async fn run_batch(config: Config) -> Result<BatchReport> {
    let start_time = Instant::now();

    let urls = read_url_list(&config.file)
        .await
        .with_context(|| format!("Failed to load URLs from {}", config.file.display()))?;

    let fetcher =
        Fetcher::new(&FetchConfig::from(&config)).context("Failed to initialize HTTP client")?;

    let records = process_urls(&fetcher, &urls, config.delay()).await;

    let exports = write_all(&config.output_dir, &records).with_context(|| {
        format!(
            "Failed to write exports to {}",
            config.output_dir.display()
        )
    })?;

    let successful = records.iter().filter(|r| r.is_success()).count();
    let failed = records.len() - successful;
    info!(
        "Batch complete: {} succeeded, {} failed",
        successful, failed
    );

    Ok(BatchReport {
        total_urls: records.len(),
        successful,
        failed,
        records,
        output_dir: config.output_dir,
        exports,
        elapsed_seconds: start_time.elapsed().as_secs_f64(),
    })
}
