use super::{CaseReport, ReportExporter, REPORT_TITLE};
use crate::parser::ExtractedRecord;
use crate::storage::QuerySummary;
use crate::CaseResult;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Serialized straight from the struct so `fields` keeps record order.
#[derive(Serialize)]
struct JsonReport<'a> {
    title: &'static str,
    query: QuerySummary,
    generated_at: DateTime<Utc>,
    fields: &'a ExtractedRecord,
}

pub struct JsonExporter;

impl ReportExporter for JsonExporter {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn content_type(&self) -> &'static str {
        "application/json"
    }

    fn render(&self, report: &CaseReport<'_>) -> CaseResult<Vec<u8>> {
        let body = JsonReport {
            title: REPORT_TITLE,
            query: report.query.summary(),
            generated_at: report.generated_at,
            fields: report.fields,
        };

        Ok(serde_json::to_vec_pretty(&body)?)
    }
}
