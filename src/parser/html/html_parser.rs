use super::text::visible_lines;
use crate::parser::record::{DATES_KEY, PARTIES_LINE_KEY, PDF_LINKS_KEY, TOP_TEXT_KEY};
use crate::parser::{ExtractedRecord, Extractor, ExtractorConfig, FieldValue, RawDocument};
use log::{debug, trace};
use scraper::{Html, Selector};
use url::Url;

/// Heuristic extractor for case-status pages that have no stable markup.
#[derive(Debug, Clone, Default)]
pub struct HtmlExtractor {
    config: ExtractorConfig,
}

impl HtmlExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }
}

impl Extractor for HtmlExtractor {
    fn extract(&self, document: RawDocument<'_>) -> ExtractedRecord {
        extract_fields(document.html, document.base_url, &self.config)
    }
}

/// Builds an [`ExtractedRecord`] from any string, HTML or not.
pub fn extract_fields(html: &str, base_url: Option<&str>, config: &ExtractorConfig) -> ExtractedRecord {
    let document = Html::parse_document(html);
    let lines = visible_lines(&document);
    trace!("Extracted {} visible lines", lines.len());

    let mut record = ExtractedRecord::new();

    collect_label_snippets(&lines, config, &mut record);

    let text = lines.join("\n");
    let dates: Vec<String> = config
        .date_pattern
        .find_iter(&text)
        .take(config.max_dates)
        .map(|m| m.as_str().to_string())
        .collect();
    if !dates.is_empty() {
        record.insert_if_absent(DATES_KEY, FieldValue::Snippets(dates));
    }

    if config.extract_links {
        let links = document_links(&document, base_url);
        if !links.is_empty() {
            record.set(PDF_LINKS_KEY, FieldValue::Snippets(links));
        }
    }

    if config.detect_parties {
        if let Some(line) = lines
            .iter()
            .take(config.parties_scan_lines)
            .find(|line| config.parties_pattern.is_match(line))
        {
            record.set(PARTIES_LINE_KEY, FieldValue::Text(line.clone()));
        }
    }

    if config.include_top_text {
        let top = lines
            .iter()
            .take(config.top_text_lines)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n");
        record.insert_if_absent(TOP_TEXT_KEY, FieldValue::Text(top));
    }

    debug!(
        "Extraction produced {} fields: {:?}",
        record.len(),
        record.keys().collect::<Vec<_>>()
    );
    record
}

fn collect_label_snippets(lines: &[String], config: &ExtractorConfig, record: &mut ExtractedRecord) {
    let window = config.snippet_window.max(1);

    for (i, line) in lines.iter().enumerate() {
        let lowered = line.to_lowercase();
        for label in &config.labels {
            if lowered.contains(label.as_str()) {
                let end = (i + window).min(lines.len());
                record.insert_or_append(label, lines[i..end].join(" "));
            }
        }
    }
}

/// Hrefs that look like order or judgment documents, resolved against `base_url`.
fn document_links(document: &Html, base_url: Option<&str>) -> Vec<String> {
    let base = base_url
        .filter(|base| !base.trim().is_empty())
        .and_then(|base| Url::parse(base).ok());
    let anchors = Selector::parse("a[href]").expect("static selector");

    let mut links = Vec::new();
    for anchor in document.select(&anchors) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };

        let href = href.trim();
        let is_pdf = href.to_lowercase().ends_with(".pdf");
        let is_order_link = || {
            let label = anchor.text().collect::<String>().to_lowercase();
            label.contains("order") && (href.contains("pdf") || href.ends_with(".pdf"))
        };

        if is_pdf || is_order_link() {
            links.push(resolve(base.as_ref(), href));
        }
    }

    links
}

fn resolve(base: Option<&Url>, href: &str) -> String {
    match base {
        Some(base) => base
            .join(href)
            .map(String::from)
            .unwrap_or_else(|_| href.to_string()),
        None => href.to_string(),
    }
}
