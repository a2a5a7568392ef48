pub mod categories;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod output;
pub mod posted_date;
pub mod search;
pub mod sweep;

pub use config::AppConfig;
pub use fetcher::{CategoryFetch, JobFetcher};
pub use output::{CsvSink, NormalizedRow};
pub use posted_date::normalize_posted_at;
pub use sweep::{run_sweep, SweepSummary};
