mod json;
mod markdown;

pub use json::JsonExporter;
pub use markdown::MarkdownExporter;

use crate::parser::ExtractedRecord;
use crate::storage::QueryRecord;
use crate::{CaseError, CaseResult};
use chrono::{DateTime, Utc};
use std::str::FromStr;

pub const REPORT_TITLE: &str = "Case Details";

/// Everything a report shows: the query it came from and the extracted fields.
#[derive(Debug, Clone, Copy)]
pub struct CaseReport<'a> {
    pub query: &'a QueryRecord,
    pub fields: &'a ExtractedRecord,
    pub generated_at: DateTime<Utc>,
}

/// Serializes a [`CaseReport`], enumerating fields in record order.
pub trait ReportExporter: Send + Sync {
    fn extension(&self) -> &'static str;
    fn content_type(&self) -> &'static str;
    fn render(&self, report: &CaseReport<'_>) -> CaseResult<Vec<u8>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Markdown,
    Json,
}

impl ReportFormat {
    pub fn exporter(self) -> Box<dyn ReportExporter> {
        match self {
            ReportFormat::Markdown => Box::new(MarkdownExporter),
            ReportFormat::Json => Box::new(JsonExporter),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = CaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "md" | "markdown" => Ok(ReportFormat::Markdown),
            "json" => Ok(ReportFormat::Json),
            other => Err(CaseError::ConfigError(format!(
                "unknown report format '{}'",
                other
            ))),
        }
    }
}

/// First character upper-cased, the rest lower-cased.
pub fn heading(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
