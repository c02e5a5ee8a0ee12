pub mod core;
pub mod export;
pub mod fetchers;
pub mod http;
pub mod parser;
pub mod render;
pub mod server;
pub mod stats;
pub mod storage;

pub use crate::core::{CaseError, CaseResult, CaseService, Settings};
pub use fetchers::{Fetcher, HttpFetcher};
pub use http::{CaseQuery, FetchedPage};
pub use parser::{extract_fields, ExtractedRecord, ExtractorConfig, FieldValue};
pub use stats::StatsTracker;
pub use storage::{QueryStore, ReportStore};
