// src/config.rs
use anyhow::Result;
use chrono::{Days, NaiveDate};
use std::path::PathBuf;
use std::time::Duration;

use crate::categories::CATEGORIES;
use crate::posted_date::DATE_FORMAT;

pub const API_KEY_VAR: &str = "SEARCH_API_KEY";
pub const API_URL_VAR: &str = "SEARCH_URL";

const DEFAULT_ENGINE: &str = "google_jobs";
const DEFAULT_LOCATION: &str = "Charlotte, North Carolina, United States";
const DEFAULT_OUTPUT_FILE: &str = "clt-jobs.csv";
const DEFAULT_PAGE_SIZE: u32 = 50;
const DEFAULT_RECENCY_DAYS: u64 = 180;
const DEFAULT_PAGE_DELAY_SECS: u64 = 2;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Inclusive posting-date window sent with every search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecencyWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl RecencyWindow {
    /// The `days` days leading up to and including `today`.
    pub fn trailing(today: NaiveDate, days: u64) -> Self {
        let start = today.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN);
        Self { start, end: today }
    }

    /// Value of the `tbs` query parameter.
    pub fn to_tbs(&self) -> String {
        format!(
            "cdr:1,cd_min:{},cd_max:{}",
            self.start.format(DATE_FORMAT),
            self.end.format(DATE_FORMAT)
        )
    }
}

/// Settings for one sweep, built once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub api_url: String,
    pub engine: String,
    pub location: String,
    pub page_size: u32,
    pub recency: RecencyWindow,
    pub page_delay: Duration,
    pub request_timeout: Duration,
    pub output_path: PathBuf,
    pub categories: Vec<String>,
}

impl AppConfig {
    pub fn new(api_key: &str, api_url: &str, today: NaiveDate) -> Self {
        Self {
            api_key: api_key.to_string(),
            api_url: api_url.to_string(),
            engine: DEFAULT_ENGINE.to_string(),
            location: DEFAULT_LOCATION.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            recency: RecencyWindow::trailing(today, DEFAULT_RECENCY_DAYS),
            page_delay: Duration::from_secs(DEFAULT_PAGE_DELAY_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            categories: CATEGORIES.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Load from the process environment, reading `.env` first when present.
    pub fn from_env(today: NaiveDate) -> Result<Self> {
        // A missing .env file is fine; the variables may already be exported.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| std::env::var(name).ok(), today)
    }

    /// Build from an arbitrary variable lookup. Both the API key and URL are required.
    pub fn from_lookup<F>(lookup: F, today: NaiveDate) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .ok_or_else(|| anyhow::anyhow!("{} environment variable not set", name))
        };

        let api_key = required(API_KEY_VAR)?;
        let api_url = required(API_URL_VAR)?;

        Ok(Self::new(&api_key, &api_url, today))
    }

    pub fn with_output_path(mut self, path: PathBuf) -> Self {
        self.output_path = path;
        self
    }

    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_page_delay(mut self, delay: Duration) -> Self {
        self.page_delay = delay;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
