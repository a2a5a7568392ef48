// src/output.rs
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::posted_date::{normalize_posted_at, NOT_AVAILABLE};
use crate::search::JobRecord;

pub const HEADER: [&str; 6] = [
    "Title",
    "Company",
    "Location",
    "Posted Date",
    "Job Link",
    "Job Highlights",
];

/// A job projected onto the six CSV columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedRow {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Posted Date")]
    pub posted_date: String,
    #[serde(rename = "Job Link")]
    pub job_link: String,
    #[serde(rename = "Job Highlights")]
    pub job_highlights: String,
}

impl NormalizedRow {
    pub fn from_job(job: &JobRecord, today: NaiveDate) -> Self {
        let job_highlights = job
            .job_highlights
            .as_ref()
            .filter(|value| !value.is_null())
            .map(|value| value.to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());

        Self {
            title: job.title.clone().unwrap_or_default(),
            company: job.company_name.clone().unwrap_or_default(),
            location: job.location.clone().unwrap_or_default(),
            posted_date: normalize_posted_at(job.posted_at(), today),
            job_link: job
                .apply_link
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            job_highlights,
        }
    }
}

/// Append-only CSV file of normalized rows.
pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    /// Create the file with its header row unless it already exists.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }

            let mut writer = csv::Writer::from_path(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            writer
                .write_record(HEADER)
                .with_context(|| format!("Failed to write header to {}", path.display()))?;
            writer
                .flush()
                .with_context(|| format!("Failed to flush {}", path.display()))?;

            info!("📄 Created {} with headers", path.display());
        }

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Normalize and append `jobs`, returning the number of rows written.
    pub fn append(&self, jobs: &[JobRecord], today: NaiveDate) -> Result<usize> {
        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open {}", self.path.display()))?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        for job in jobs {
            writer
                .serialize(NormalizedRow::from_job(job, today))
                .with_context(|| format!("Failed to append row to {}", self.path.display()))?;
        }
        writer
            .flush()
            .with_context(|| format!("Failed to flush {}", self.path.display()))?;

        info!("📁 Appended {} jobs to {}", jobs.len(), self.path.display());
        Ok(jobs.len())
    }
}
