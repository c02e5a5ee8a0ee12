use super::*;
use crate::parser::{ExtractedRecord, Extractor, ExtractorConfig, FieldValue, RawDocument};
use scraper::Html;

fn extract(html: &str, base_url: Option<&str>) -> ExtractedRecord {
    extract_fields(html, base_url, &ExtractorConfig::default())
}

const CASE_PAGE: &str = r#"
<html>
  <head><title>Case Status</title><style>.x { color: red }</style></head>
  <body>
    <table>
      <tr><td>W.P.(C) 1234/2023</td></tr>
      <tr><td>Ram Kumar vs Union of India</td></tr>
      <tr><td>Petitioner: Ram Kumar</td></tr>
      <tr><td>Respondent: Union of India</td></tr>
      <tr><td>Next Hearing: 12-04-2024 before Bench X</td></tr>
      <tr><td>Court No. 5</td></tr>
      <tr><td>Item 12</td></tr>
    </table>
    <script>var nextHearing = "01-01-1999";</script>
    <a href="/docs/order1.pdf">Final Order</a>
    <a href="viewer.asp?type=pdf&amp;id=7">Interim order</a>
    <a href="/about">About the court</a>
  </body>
</html>
"#;

#[test]
fn test_error_marker_still_yields_top_text() {
    let record = extract("ERROR: timeout", None);

    assert_eq!(record.text("top_text"), Some("ERROR: timeout"));
    assert!(!record.contains("dates"));
    assert!(!record.contains("pdf_links"));
    assert!(!record.contains("parties_line"));
}

#[test]
fn test_empty_and_garbage_inputs_never_fail() {
    for input in ["", "   ", "<<<>>>", "<html><body></body>", "\u{0}\u{1}binary", "<a href>"] {
        let record = extract(input, Some("not a url"));
        assert!(record.contains("top_text"), "missing top_text for {:?}", input);
    }
    assert_eq!(extract("", None).text("top_text"), Some(""));
}

#[test]
fn test_top_text_is_first_thirty_lines() {
    let body: String = (1..=40).map(|n| format!("<p>line {}</p>", n)).collect();
    let record = extract(&format!("<html><body>{}</body></html>", body), None);

    let top = record.text("top_text").unwrap();
    let lines: Vec<&str> = top.split('\n').collect();
    assert_eq!(lines.len(), 30);
    assert_eq!(lines[0], "line 1");
    assert_eq!(lines[29], "line 30");
}

#[test]
fn test_keyword_snippets_overlap_across_labels() {
    let record = extract(CASE_PAGE, None);

    let expected = "Next Hearing: 12-04-2024 before Bench X Court No. 5 Item 12";
    assert_eq!(record.snippets("next hearing").unwrap(), &[expected.to_string()]);
    assert_eq!(record.snippets("hearing").unwrap(), &[expected.to_string()]);
    assert_eq!(
        record.snippets("petitioner").unwrap()[0],
        "Petitioner: Ram Kumar Respondent: Union of India Next Hearing: 12-04-2024 before Bench X"
    );
}

#[test]
fn test_snippet_window_clipped_at_end() {
    let record = extract("<p>intro</p><p>Final judgment reserved</p><p>last</p>", None);

    assert_eq!(
        record.snippets("judgment").unwrap(),
        &["Final judgment reserved last".to_string()]
    );
}

#[test]
fn test_repeated_matches_are_not_deduplicated() {
    let record = extract("<p>Order</p><p>Order</p>", None);

    assert_eq!(
        record.snippets("order").unwrap(),
        &["Order Order".to_string(), "Order".to_string()]
    );
}

#[test]
fn test_labels_keyed_in_first_match_order() {
    let record = extract("<p>Next hearing soon</p><p>Petitioner: A</p>", None);
    let keys: Vec<&str> = record.keys().collect();

    assert_eq!(keys, vec!["next hearing", "hearing", "petitioner", "top_text"]);
}

#[test]
fn test_dates_in_order() {
    let record = extract(
        "<p>Filed on 5/6/2023 and next date 07-08-2024 and 1-1-23</p>",
        None,
    );

    assert_eq!(
        record.snippets("dates").unwrap(),
        &["5/6/2023".to_string(), "07-08-2024".to_string(), "1-1-23".to_string()]
    );
}

#[test]
fn test_dates_capped_at_five() {
    let text = (1..=8)
        .map(|d| format!("{}-01-2024", d))
        .collect::<Vec<_>>()
        .join(" ");
    let record = extract(&format!("<p>{}</p>", text), None);

    let dates = record.snippets("dates").unwrap();
    assert_eq!(dates.len(), 5);
    assert_eq!(dates[0], "1-01-2024");
    assert_eq!(dates[4], "5-01-2024");
}

#[test]
fn test_dates_need_word_boundaries() {
    let record = extract("<p>ref 123-45-6789 and 99/99/99999</p>", None);
    assert!(!record.contains("dates"));
}

#[test]
fn test_script_text_is_not_visible() {
    let record = extract(CASE_PAGE, None);
    let dates = record.snippets("dates").unwrap();

    assert_eq!(dates, &["12-04-2024".to_string()]);
    assert!(!record.text("top_text").unwrap().contains("color: red"));
}

#[test]
fn test_noscript_text_is_visible() {
    let record = extract(
        "<body><noscript>Please enable JavaScript</noscript><p>Ram vs Shyam</p></body>",
        None,
    );
    assert_eq!(
        record.text("top_text"),
        Some("Please enable JavaScript\nRam vs Shyam")
    );
}

#[test]
fn test_pdf_links_resolved_against_base() {
    let record = extract(
        r#"<a href="/docs/order1.pdf">Final Order</a>"#,
        Some("https://example.org"),
    );

    assert_eq!(
        record.snippets("pdf_links").unwrap(),
        &["https://example.org/docs/order1.pdf".to_string()]
    );
}

#[test]
fn test_resolved_links_are_percent_encoded() {
    let record = extract(
        r#"<a href="/docs/my order.pdf">Order</a>"#,
        Some("https://example.org/case"),
    );
    assert_eq!(
        record.snippets("pdf_links").unwrap(),
        &["https://example.org/docs/my%20order.pdf".to_string()]
    );

    let record = extract(r#"<a href="o.pdf">x</a>"#, Some("example.org/path/"));
    assert_eq!(record.snippets("pdf_links").unwrap(), &["o.pdf".to_string()]);
}

#[test]
fn test_order_links_without_pdf_suffix() {
    let record = extract(CASE_PAGE, Some("https://court.example/case.asp"));

    assert_eq!(
        record.snippets("pdf_links").unwrap(),
        &[
            "https://court.example/docs/order1.pdf".to_string(),
            "https://court.example/viewer.asp?type=pdf&id=7".to_string(),
        ]
    );
}

#[test]
fn test_links_kept_verbatim_without_base() {
    let record = extract(r#"<a href=" files/Judgment.PDF ">download</a>"#, None);

    assert_eq!(
        record.snippets("pdf_links").unwrap(),
        &["files/Judgment.PDF".to_string()]
    );

    let record = extract(r#"<a href="/a.pdf">x</a>"#, Some(""));
    assert_eq!(record.snippets("pdf_links").unwrap(), &["/a.pdf".to_string()]);
}

#[test]
fn test_non_document_links_ignored() {
    let record = extract(
        r#"<a href="/about">About</a><a href="/orders">Order list</a><a>order.pdf</a>"#,
        Some("https://example.org"),
    );
    assert!(!record.contains("pdf_links"));
}

#[test]
fn test_parties_line_detected() {
    let record = extract(CASE_PAGE, None);
    assert_eq!(
        record.text("parties_line"),
        Some("Ram Kumar vs Union of India")
    );

    let record = extract("<p>State v. Mehta</p>", None);
    assert_eq!(record.text("parties_line"), Some("State v. Mehta"));
}

#[test]
fn test_parties_line_absent_without_match() {
    let record = extract("<p>Revision petition</p><p>Vsevolod filed it</p>", None);
    assert!(!record.contains("parties_line"));
    assert!(record.get("parties_line").is_none());
}

#[test]
fn test_parties_line_only_scans_leading_lines() {
    let filler: String = (0..400).map(|n| format!("<p>row {}</p>", n)).collect();
    let html = format!("{}<p>A versus B</p>", filler);

    let record = extract(&html, None);
    assert!(!record.contains("parties_line"));
}

#[test]
fn test_parties_line_found_on_last_scanned_line() {
    let filler: String = (0..399).map(|n| format!("<p>row {}</p>", n)).collect();
    let html = format!("{}<p>A versus B</p>", filler);

    let record = extract(&html, None);
    assert_eq!(record.text("parties_line"), Some("A versus B"));
}

#[test]
fn test_idempotent() {
    let first = extract(CASE_PAGE, Some("https://court.example/"));
    let second = extract(CASE_PAGE, Some("https://court.example/"));

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_basic_variant_omits_rich_fields() {
    let record = extract_fields(CASE_PAGE, Some("https://court.example/"), &ExtractorConfig::basic());

    assert!(record.contains("hearing"));
    assert!(record.contains("dates"));
    assert!(!record.contains("next hearing"));
    assert!(!record.contains("pdf_links"));
    assert!(!record.contains("parties_line"));
    assert!(!record.contains("top_text"));
}

#[test]
fn test_custom_config() {
    let config = ExtractorConfig::default()
        .with_labels(["Bench"])
        .with_snippet_window(1)
        .with_date_pattern(r"\d{4}")
        .unwrap()
        .with_max_dates(1);

    let record = extract_fields(CASE_PAGE, None, &config);
    assert_eq!(
        record.snippets("bench").unwrap(),
        &["Next Hearing: 12-04-2024 before Bench X".to_string()]
    );
    assert_eq!(record.snippets("dates").unwrap(), &["1234".to_string()]);
}

#[test]
fn test_extractor_trait_matches_function() {
    let extractor = HtmlExtractor::default();
    let document = RawDocument::new(CASE_PAGE, Some("https://court.example/"));

    assert_eq!(
        extractor.extract(document),
        extract(CASE_PAGE, Some("https://court.example/"))
    );
}

#[test]
fn test_visible_lines_split_multiline_nodes() {
    let document = Html::parse_document("<pre>first\n\n  second  \r\nthird</pre><p> </p>");
    assert_eq!(visible_lines(&document), vec!["first", "second", "third"]);
}

#[test]
fn test_text_value_for_top_text() {
    let record = extract("<p>only</p>", None);
    assert_eq!(
        record.get("top_text"),
        Some(&FieldValue::Text("only".to_string()))
    );
}
