use chrono::Utc;
use log::{debug, info, warn};
use std::path::PathBuf;
use std::sync::Arc;

use crate::core::Settings;
use crate::export::{CaseReport, ReportFormat};
use crate::fetchers::{error_marker, Fetcher};
use crate::http::CaseQuery;
use crate::parser::{ExtractedRecord, Extractor, HtmlExtractor, RawDocument};
use crate::stats::StatsTracker;
use crate::storage::{NewQuery, QueryRecord, QueryStore, QuerySummary, ReportStore};
use crate::CaseResult;

/// A stored query together with what the extractor found in it.
#[derive(Debug, Clone)]
pub struct CaseView {
    pub record: QueryRecord,
    pub fields: ExtractedRecord,
}

#[derive(Debug, Clone)]
pub struct ExportedReport {
    pub path: PathBuf,
    pub file_name: String,
    pub content_type: &'static str,
    pub contents: Vec<u8>,
}

/// Cuts `s` to at most `max_chars` characters without splitting one.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Fetch, persist, and re-extract on demand.
pub struct CaseService {
    fetcher: Arc<dyn Fetcher>,
    extractor: Arc<dyn Extractor>,
    store: Arc<QueryStore>,
    reports: ReportStore,
    max_stored_chars: usize,
    stats: StatsTracker,
}

impl CaseService {
    pub fn new(fetcher: Arc<dyn Fetcher>, store: QueryStore, reports: ReportStore) -> Self {
        Self {
            fetcher,
            extractor: Arc::new(HtmlExtractor::default()),
            store: Arc::new(store),
            reports,
            max_stored_chars: Settings::default().max_stored_chars,
            stats: StatsTracker::new(),
        }
    }

    pub fn with_extractor(mut self, extractor: Arc<dyn Extractor>) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn with_max_stored_chars(mut self, max: usize) -> Self {
        self.max_stored_chars = max;
        self
    }

    pub fn stats(&self) -> &StatsTracker {
        &self.stats
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &QueryStore {
        &self.store
    }

    /// Runs the search and stores whatever came back, error marker included.
    pub async fn submit(&self, query: CaseQuery) -> CaseResult<i64> {
        let started = Utc::now();
        let html = match self.fetcher.fetch(&query).await {
            Ok(page) => {
                debug!(
                    "Result page for {} from {} at {}",
                    query.label(),
                    page.url,
                    page.timestamp.to_rfc3339()
                );
                self.stats
                    .record_fetch(page.body.len(), Utc::now().signed_duration_since(started));
                page.body
            }
            Err(e) => {
                warn!("Fetch for {} failed: {}", query.label(), e);
                let reason = e.to_string();
                let marker = error_marker(&e);
                self.stats
                    .record_failure(reason, Utc::now().signed_duration_since(started));
                marker
            }
        };

        let stored = truncate_chars(&html, self.max_stored_chars);
        if stored.len() < html.len() {
            debug!(
                "Truncated HTML for {} from {} to {} bytes",
                query.label(),
                html.len(),
                stored.len()
            );
        }

        let new_query = NewQuery {
            court: self.fetcher.court_url().to_string(),
            case_type: query.case_type,
            case_number: query.case_number,
            case_year: query.case_year,
            raw_html: stored.to_string(),
        };
        let store = Arc::clone(&self.store);
        let id = tokio::task::spawn_blocking(move || store.insert(&new_query)).await??;
        info!("Stored query {}", id);
        Ok(id)
    }

    pub fn lookup(&self, id: i64) -> CaseResult<Option<CaseView>> {
        let Some(record) = self.store.get(id)? else {
            debug!("No stored query {}", id);
            return Ok(None);
        };

        let base_url = Some(record.court.as_str()).filter(|court| !court.is_empty());
        let fields = self
            .extractor
            .extract(RawDocument::new(&record.raw_html, base_url));
        self.stats.record_extraction();

        Ok(Some(CaseView { record, fields }))
    }

    /// Renders the report for `id` and writes it to the downloads directory.
    pub fn export(&self, id: i64, format: ReportFormat) -> CaseResult<Option<ExportedReport>> {
        let Some(view) = self.lookup(id)? else {
            return Ok(None);
        };

        let exporter = format.exporter();
        let contents = exporter.render(&CaseReport {
            query: &view.record,
            fields: &view.fields,
            generated_at: Utc::now(),
        })?;

        let file_name = ReportStore::file_name(
            &view.record.case_type,
            &view.record.case_number,
            &view.record.case_year,
            exporter.extension(),
        );
        let path = self.reports.save(&file_name, &contents)?;
        self.stats.record_export();
        info!("Exported query {} to {}", id, path.display());

        Ok(Some(ExportedReport {
            path,
            file_name,
            content_type: exporter.content_type(),
            contents,
        }))
    }

    pub fn recent(&self, limit: usize) -> CaseResult<Vec<QuerySummary>> {
        self.store.recent(limit)
    }
}
