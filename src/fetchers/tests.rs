use super::*;
use crate::http::CaseQuery;
use crate::CaseError;
use std::time::Duration;
use url::Url;
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SEARCH_PAGE: &str = r#"
<html><body>
  <form action="/case_result.asp" method="POST">
    <input type="hidden" name="token" value="abc123">
    <select name="ctype" id="case_type">
      <option value="">-- select --</option>
      <option value="CRL.A">CRL.A - Criminal Appeal</option>
      <option value="WPC">W.P.(C) - Writ Petition</option>
    </select>
    <input type="text" name="cno" placeholder="Case Number">
    <input name="cyear" aria-label="Case Year">
    <input type="checkbox" name="archived" value="1">
    <input type="reset" name="clear" value="Reset">
    <button type="button" name="help">Help</button>
    <input type="submit" name="submit" value="Search">
  </form>
</body></html>
"#;

fn page_url() -> Url {
    Url::parse("https://court.example/case.asp").unwrap()
}

#[test]
fn test_form_fields_matched_by_keyword() {
    let query = CaseQuery::new("W.P.(C)", "1234", "2023");
    let submission = fill_search_form(SEARCH_PAGE, &page_url(), &query)
        .unwrap()
        .unwrap();

    assert_eq!(submission.method, FormMethod::Post);
    assert_eq!(submission.action.as_str(), "https://court.example/case_result.asp");
    assert_eq!(submission.value("token"), Some("abc123"));
    assert_eq!(submission.value("ctype"), Some("WPC"));
    assert_eq!(submission.value("cno"), Some("1234"));
    assert_eq!(submission.value("cyear"), Some("2023"));
    assert_eq!(submission.value("submit"), Some("Search"));
    assert_eq!(submission.value("archived"), None);
    assert_eq!(submission.value("clear"), None);
    assert_eq!(submission.value("help"), None);
}

#[test]
fn test_unmatched_select_keeps_selected_option() {
    let html = r#"
        <form>
          <select name="bench"><option value="1">One</option><option value="2" selected>Two</option></select>
          <input type="text" name="case_type">
          <button name="go_btn">Go</button>
        </form>
    "#;
    let query = CaseQuery::new("CRL.A", "7", "2020");
    let submission = fill_search_form(html, &page_url(), &query).unwrap().unwrap();

    assert_eq!(submission.method, FormMethod::Get);
    assert_eq!(submission.action, page_url());
    assert_eq!(submission.value("bench"), Some("2"));
    assert_eq!(submission.value("case_type"), Some("CRL.A"));
    assert_eq!(submission.value("go_btn"), Some("Go"));
}

#[test]
fn test_case_form_preferred_over_leading_site_search() {
    let html = format!(
        r#"<form action="/search"><input name="q"><button>Go</button></form>{}"#,
        SEARCH_PAGE
    );
    let query = CaseQuery::new("W.P.(C)", "1234", "2023");
    let submission = fill_search_form(&html, &page_url(), &query).unwrap().unwrap();

    assert_eq!(submission.action.as_str(), "https://court.example/case_result.asp");
    assert_eq!(submission.value("cno"), Some("1234"));
    assert_eq!(submission.value("q"), None);
}

#[test]
fn test_search_button_picks_form_without_case_fields() {
    let html = r#"
        <form action="/login"><input name="user"><button>Log in</button></form>
        <form action="/status"><input name="diary"><input type="submit" value="View"></form>
    "#;
    let query = CaseQuery::new("WPC", "1", "2024");
    let submission = fill_search_form(html, &page_url(), &query).unwrap().unwrap();
    assert_eq!(submission.action.as_str(), "https://court.example/status");

    let html = r#"<form action="/a"><input name="x"></form><form action="/b"><input name="y"></form>"#;
    let submission = fill_search_form(html, &page_url(), &query).unwrap().unwrap();
    assert_eq!(submission.action.as_str(), "https://court.example/a");
}

#[test]
fn test_page_without_form() {
    let query = CaseQuery::new("WPC", "1", "2024");
    let submission = fill_search_form("<p>Site under maintenance</p>", &page_url(), &query).unwrap();
    assert!(submission.is_none());
}

#[test]
fn test_error_marker_format() {
    let marker = error_marker(&CaseError::FetchError("timeout".to_string()));
    assert_eq!(marker, "ERROR: Fetch failed: timeout");
}

#[tokio::test]
async fn test_http_fetcher_submits_form() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/case.asp"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SEARCH_PAGE))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/case_result.asp"))
        .and(body_string_contains("cno=1234"))
        .and(body_string_contains("cyear=2023"))
        .and(body_string_contains("ctype=WPC"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<p>Ram Kumar vs State</p><p>Next date 01-02-2024</p>"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let court_url = format!("{}/case.asp", server.uri());
    let fetcher = HttpFetcher::new(&court_url, Duration::from_secs(5), "casewatch-test").unwrap();
    let page = fetcher
        .fetch(&CaseQuery::new("W.P.(C)", "1234", "2023"))
        .await
        .unwrap();

    assert_eq!(page.status, 200);
    assert!(page.body.contains("Ram Kumar vs State"));
    assert_eq!(page.url.path(), "/case_result.asp");
    assert_eq!(fetcher.court_url(), court_url);
}

#[tokio::test]
async fn test_http_fetcher_get_form() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/case.asp"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<form action="status"><input name="case_no"><input name="year"><input type="submit" value="Show"></form>"#,
        ))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/status"))
        .and(query_param("case_no", "55"))
        .and(query_param("year", "2019"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<p>Disposed</p>"))
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new(
        &format!("{}/case.asp", server.uri()),
        Duration::from_secs(5),
        "casewatch-test",
    )
    .unwrap();
    let page = fetcher.fetch(&CaseQuery::new("", "55", "2019")).await.unwrap();

    assert_eq!(page.body, "<p>Disposed</p>");
}

#[tokio::test]
async fn test_http_fetcher_landing_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new(
        &format!("{}/case.asp", server.uri()),
        Duration::from_secs(5),
        "casewatch-test",
    )
    .unwrap();
    let err = fetcher.fetch(&CaseQuery::new("WPC", "1", "2024")).await.unwrap_err();

    assert!(matches!(err, CaseError::StatusError { status: 503, .. }));
}

#[tokio::test]
async fn test_mock_fetcher_cycles_and_records() {
    let fetcher = MockFetcher::new(
        "https://court.example/case.asp",
        vec![
            MockResponse::Page("<p>first</p>".to_string()),
            MockResponse::Failure("boom".to_string()),
        ],
    );
    let query = CaseQuery::new("WPC", "1", "2024");

    assert_eq!(fetcher.fetch(&query).await.unwrap().body, "<p>first</p>");
    assert!(fetcher.fetch(&query).await.is_err());
    assert!(fetcher.fetch(&query).await.is_ok());
    assert_eq!(fetcher.received().len(), 3);
}
