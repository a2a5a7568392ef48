// src/fetcher.rs
use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, info};

use crate::config::AppConfig;
use crate::error::FetchError;
use crate::search::{JobRecord, PageStep, SearchResponse};

/// Everything collected for one category, including pages read before a failure.
#[derive(Debug, Default)]
pub struct CategoryFetch {
    pub jobs: Vec<JobRecord>,
    pub pages: usize,
    pub failure: Option<FetchError>,
}

pub struct JobFetcher {
    client: Client,
    api_url: String,
    base_params: Vec<(&'static str, String)>,
    page_delay: Duration,
}

impl JobFetcher {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .context("Failed to create HTTP client")?;

        let base_params = vec![
            ("engine", config.engine.clone()),
            ("location", config.location.clone()),
            ("tbs", config.recency.to_tbs()),
            ("api_key", config.api_key.clone()),
            ("num", config.page_size.to_string()),
        ];

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            base_params,
            page_delay: config.page_delay,
        })
    }

    /// Follow pagination for `query` until the API runs dry or a request fails.
    pub async fn fetch_category(&self, query: &str) -> CategoryFetch {
        let mut fetch = CategoryFetch::default();
        let mut token: Option<String> = None;

        loop {
            let response = match self.fetch_page(query, token.as_deref()).await {
                Ok(response) => response,
                Err(e) => {
                    error!("❌ {} (category: {}, pages read: {})", e, query, fetch.pages);
                    fetch.failure = Some(e);
                    break;
                }
            };

            let step = response.next_step();
            let jobs = response.into_jobs();
            if jobs.is_empty() {
                info!("✅ No more jobs found, stopping pagination.");
                break;
            }

            info!("✅ Retrieved {} jobs", jobs.len());
            fetch.jobs.extend(jobs);
            fetch.pages += 1;

            match step {
                PageStep::More(next) => {
                    token = Some(next);
                    tokio::time::sleep(self.page_delay).await;
                }
                PageStep::Done => {
                    info!(
                        "✅ No more pages available, read {} pages. Stopping pagination.",
                        fetch.pages
                    );
                    break;
                }
            }
        }

        fetch
    }

    async fn fetch_page(&self, query: &str, token: Option<&str>) -> Result<SearchResponse, FetchError> {
        let mut params: Vec<(&str, &str)> = vec![("q", query)];
        params.extend(self.base_params.iter().map(|(k, v)| (*k, v.as_str())));
        if let Some(token) = token {
            params.push(("next_page_token", token));
        }

        debug!("Requesting {} (q: {}, token: {:?})", self.api_url, query, token);

        let response = self.client.get(&self.api_url).query(&params).send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status { status, body });
        }

        Ok(serde_json::from_str(&body)?)
    }
}
