// src/sweep.rs
use anyhow::Result;
use chrono::NaiveDate;
use tracing::{error, info, info_span, warn, Instrument};

use crate::config::AppConfig;
use crate::fetcher::JobFetcher;
use crate::output::CsvSink;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepSummary {
    pub categories: usize,
    pub jobs_written: usize,
    pub failed_categories: usize,
    pub write_failures: usize,
}

/// Search every configured category in order and append what comes back.
///
/// Only startup problems (HTTP client, output header) abort the run. A failing
/// category is logged and the sweep moves on to the next one.
pub async fn run_sweep(config: &AppConfig, today: NaiveDate) -> Result<SweepSummary> {
    let fetcher = JobFetcher::new(config)?;
    let sink = CsvSink::open(&config.output_path)?;
    let run_id = uuid::Uuid::new_v4();

    let mut summary = SweepSummary::default();

    for category in &config.categories {
        let span = info_span!("category", %run_id, category = %category);
        async {
            info!("Searching for jobs under category: {}", category);
            summary.categories += 1;

            let fetch = fetcher.fetch_category(category).await;
            if fetch.failure.is_some() {
                summary.failed_categories += 1;
            }

            if fetch.jobs.is_empty() {
                warn!("⚠️ No jobs found for category: {}", category);
                return;
            }

            match sink.append(&fetch.jobs, today) {
                Ok(written) => summary.jobs_written += written,
                Err(e) => {
                    error!("Failed to save jobs for {}: {:#}", category, e);
                    summary.write_failures += 1;
                }
            }
        }
        .instrument(span)
        .await;
    }

    info!(
        "Sweep finished: {} categories, {} jobs written to {}, {} failed categories, {} write failures",
        summary.categories,
        summary.jobs_written,
        sink.path().display(),
        summary.failed_categories,
        summary.write_failures
    );

    Ok(summary)
}
