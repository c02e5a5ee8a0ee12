use super::{heading, CaseReport, ReportExporter, REPORT_TITLE};
use crate::CaseResult;
use std::fmt::Write;

/// Form feed followed by a rule; printers break the page, viewers show a line.
const PAGE_BREAK: &str = "\u{c}\n---\n\n";

pub struct MarkdownExporter;

impl ReportExporter for MarkdownExporter {
    fn extension(&self) -> &'static str {
        "md"
    }

    fn content_type(&self) -> &'static str {
        "text/markdown; charset=utf-8"
    }

    fn render(&self, report: &CaseReport<'_>) -> CaseResult<Vec<u8>> {
        let query = report.query;
        let mut out = String::new();

        // Title page
        let _ = writeln!(out, "# {}\n", REPORT_TITLE);
        let _ = writeln!(out, "- Court: {}", query.court);
        let _ = writeln!(
            out,
            "- Case: {} {}/{}",
            query.case_type, query.case_number, query.case_year
        );
        let _ = writeln!(out, "- Query: #{} ({})", query.id, query.created_at.to_rfc3339());
        let _ = writeln!(out, "- Generated: {}\n", report.generated_at.to_rfc3339());
        out.push_str(PAGE_BREAK);

        if report.fields.is_empty() {
            out.push_str("_No fields were extracted._\n");
        }

        for (label, value) in report.fields.iter() {
            let _ = writeln!(out, "### {}:\n", heading(label));
            for item in value.items() {
                let _ = writeln!(out, "{}\n", item);
            }
        }

        Ok(out.into_bytes())
    }
}
