// src/search.rs
//! Wire types for the job search API.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One page of search results.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub jobs: Option<Vec<JobRecord>>,
    #[serde(default, deserialize_with = "object_or_none")]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub company_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "object_or_none")]
    pub detected_extensions: Option<DetectedExtensions>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub apply_link: Option<String>,
    /// Passed through untouched.
    pub job_highlights: Option<Value>,
}

impl JobRecord {
    pub fn posted_at(&self) -> Option<&str> {
        self.detected_extensions
            .as_ref()
            .and_then(|ext| ext.posted_at.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectedExtensions {
    #[serde(default, deserialize_with = "lenient_string")]
    pub posted_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default, deserialize_with = "lenient_string")]
    pub next_page_token: Option<String>,
}

/// Text fields keep strings as-is and render any other non-null value as JSON,
/// so one oddly typed field never rejects the whole page.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}

/// Nested objects that arrive as anything other than an object count as absent.
fn object_or_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => serde_json::from_value(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

/// What to do after a page has been read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageStep {
    /// Request the next page with this token.
    More(String),
    Done,
}

impl SearchResponse {
    pub fn jobs(&self) -> &[JobRecord] {
        self.jobs.as_deref().unwrap_or_default()
    }

    pub fn into_jobs(self) -> Vec<JobRecord> {
        self.jobs.unwrap_or_default()
    }

    /// An empty page or a missing/blank token ends pagination.
    pub fn next_step(&self) -> PageStep {
        if self.jobs().is_empty() {
            return PageStep::Done;
        }
        match self
            .pagination
            .as_ref()
            .and_then(|p| p.next_page_token.as_deref())
        {
            Some(token) if !token.is_empty() => PageStep::More(token.to_string()),
            _ => PageStep::Done,
        }
    }
}
