use chrono::{DateTime, Utc};
use serde::Serialize;

/// A query about to be persisted; the store assigns id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuery {
    pub court: String,
    pub case_type: String,
    pub case_number: String,
    pub case_year: String,
    pub raw_html: String,
}

/// A persisted submission. Never updated once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryRecord {
    pub id: i64,
    /// Court URL the search was sent to, also the base for relative links.
    pub court: String,
    pub case_type: String,
    pub case_number: String,
    pub case_year: String,
    pub raw_html: String,
    pub created_at: DateTime<Utc>,
}

impl QueryRecord {
    pub fn summary(&self) -> QuerySummary {
        QuerySummary {
            id: self.id,
            court: self.court.clone(),
            case_type: self.case_type.clone(),
            case_number: self.case_number.clone(),
            case_year: self.case_year.clone(),
            created_at: self.created_at,
        }
    }
}

/// Listing row, without the stored HTML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuerySummary {
    pub id: i64,
    pub court: String,
    pub case_type: String,
    pub case_number: String,
    pub case_year: String,
    pub created_at: DateTime<Utc>,
}
