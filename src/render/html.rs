//! Server-side HTML pages, built with plain `format!` templates.

use super::html_escape;
use crate::core::CaseView;
use crate::parser::record::PDF_LINKS_KEY;
use crate::storage::QuerySummary;

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; max-width: 960px; margin: 2rem auto; padding: 0 1rem; color: #222; }
form label { display: block; margin: .5rem 0; }
input { padding: .3rem; }
table { border-collapse: collapse; width: 100%; }
td, th { border-bottom: 1px solid #ddd; padding: .3rem; text-align: left; }
section.field { margin-bottom: 1.2rem; }
pre { white-space: pre-wrap; background: #f6f6f6; padding: 1rem; max-height: 30rem; overflow: auto; }
"#;

fn base_template(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - casewatch</title>
    <style>{style}</style>
</head>
<body>
    <header><nav><a href="/">casewatch</a></nav></header>
    <main>
        <h1>{title}</h1>
        {content}
    </main>
</body>
</html>"#,
        title = html_escape(title),
        style = STYLE,
        content = content
    )
}

/// Search form plus the most recent queries.
pub fn index_page(court_url: &str, recent: &[QuerySummary]) -> String {
    let mut rows = String::new();
    for query in recent {
        rows.push_str(&format!(
            r#"<tr><td><a href="/result/{id}">#{id}</a></td><td>{case_type}</td><td>{number}</td><td>{year}</td><td>{created}</td></tr>"#,
            id = query.id,
            case_type = html_escape(&query.case_type),
            number = html_escape(&query.case_number),
            year = html_escape(&query.case_year),
            created = query.created_at.format("%Y-%m-%d %H:%M"),
        ));
    }

    let history = if rows.is_empty() {
        "<p>No searches yet.</p>".to_string()
    } else {
        format!(
            "<table><thead><tr><th>Query</th><th>Type</th><th>Number</th><th>Year</th><th>Submitted</th></tr></thead><tbody>{}</tbody></table>",
            rows
        )
    };

    let content = format!(
        r#"<p>Searches are sent to <code>{court}</code>.</p>
        <form method="post" action="/">
            <label>Case type <input name="case_type" required></label>
            <label>Case number <input name="case_number" required></label>
            <label>Case year <input name="case_year" required></label>
            <button type="submit">Search</button>
        </form>
        <h2>Recent searches</h2>
        {history}"#,
        court = html_escape(court_url),
        history = history
    );
    base_template("Case status lookup", &content)
}

fn render_item(label: &str, item: &str) -> String {
    let escaped = html_escape(item);
    let is_web_link = item.starts_with("http://") || item.starts_with("https://");
    if label == PDF_LINKS_KEY && is_web_link {
        format!(r#"<li><a href="{0}">{0}</a></li>"#, escaped)
    } else {
        format!("<li>{}</li>", escaped.replace('\n', "<br>"))
    }
}

/// Every extracted field in record order, then the stored HTML.
pub fn result_page(view: &CaseView) -> String {
    let record = &view.record;
    let mut sections = String::new();

    for (label, value) in view.fields.iter() {
        let items: String = value
            .items()
            .into_iter()
            .map(|item| render_item(label, item))
            .collect();
        sections.push_str(&format!(
            r#"<section class="field"><h3>{}</h3><ul>{}</ul></section>"#,
            html_escape(label),
            items
        ));
    }
    if sections.is_empty() {
        sections.push_str("<p>Nothing could be extracted from this page.</p>");
    }

    let content = format!(
        r#"<p>{case_type} {number}/{year} &middot; searched {created} at <code>{court}</code></p>
        <p>Download report: <a href="/result/{id}/report?format=md">Markdown</a> &middot; <a href="/result/{id}/report?format=json">JSON</a></p>
        {sections}
        <h2>Stored page</h2>
        <pre>{raw}</pre>"#,
        case_type = html_escape(&record.case_type),
        number = html_escape(&record.case_number),
        year = html_escape(&record.case_year),
        created = record.created_at.format("%Y-%m-%d %H:%M"),
        court = html_escape(&record.court),
        id = record.id,
        sections = sections,
        raw = html_escape(&record.raw_html),
    );
    base_template(&format!("Query #{}", record.id), &content)
}

pub fn message_page(title: &str, message: &str) -> String {
    base_template(title, &format!("<p>{}</p>", html_escape(message)))
}
