use axum::extract::{Form, Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Json;
use log::{error, info};
use serde::Deserialize;
use std::sync::Arc;

use super::AppState;
use crate::export::ReportFormat;
use crate::http::CaseQuery;
use crate::render::{index_page, message_page, result_page};
use crate::stats::LookupStats;
use crate::{CaseError, CaseResult, CaseService};

/// Runs store and disk work on the blocking pool.
async fn run_blocking<T, F>(state: &AppState, work: F) -> CaseResult<T>
where
    F: FnOnce(&CaseService) -> CaseResult<T> + Send + 'static,
    T: Send + 'static,
{
    let service = Arc::clone(&state.service);
    tokio::task::spawn_blocking(move || work(&service)).await?
}

fn internal_error(err: CaseError) -> Response {
    error!("Request failed: {}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(message_page("Something went wrong", &err.to_string())),
    )
        .into_response()
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Html(message_page("Not found", "No record found")),
    )
        .into_response()
}

pub async fn index(State(state): State<AppState>) -> Response {
    let limit = state.recent_limit;
    match run_blocking(&state, move |service| service.recent(limit)).await {
        Ok(recent) => Html(index_page(&state.court_url, &recent)).into_response(),
        Err(e) => internal_error(e),
    }
}

pub async fn submit(State(state): State<AppState>, Form(query): Form<CaseQuery>) -> Response {
    let query = CaseQuery::new(query.case_type, query.case_number, query.case_year);
    info!("Search submitted for {}", query.label());

    match state.service.submit(query).await {
        Ok(id) => Redirect::to(&format!("/result/{}", id)).into_response(),
        Err(e) => internal_error(e),
    }
}

pub async fn result(State(state): State<AppState>, Path(query_id): Path<i64>) -> Response {
    match run_blocking(&state, move |service| service.lookup(query_id)).await {
        Ok(Some(view)) => Html(result_page(&view)).into_response(),
        Ok(None) => not_found(),
        Err(e) => internal_error(e),
    }
}

#[derive(Debug, Deserialize)]
pub struct ReportParams {
    format: Option<String>,
}

pub async fn report(
    State(state): State<AppState>,
    Path(query_id): Path<i64>,
    Query(params): Query<ReportParams>,
) -> Response {
    let format = match params.format.as_deref().map(str::parse::<ReportFormat>) {
        None => ReportFormat::default(),
        Some(Ok(format)) => format,
        Some(Err(e)) => {
            return (
                StatusCode::BAD_REQUEST,
                Html(message_page("Bad request", &e.to_string())),
            )
                .into_response()
        }
    };

    match run_blocking(&state, move |service| service.export(query_id, format)).await {
        Ok(Some(report)) => (
            [
                (header::CONTENT_TYPE, report.content_type.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", report.file_name),
                ),
            ],
            report.contents,
        )
            .into_response(),
        Ok(None) => not_found(),
        Err(e) => internal_error(e),
    }
}

/// Fetch, extraction and export counters since the server started.
pub async fn stats(State(state): State<AppState>) -> Json<LookupStats> {
    Json(state.service.stats().get_stats())
}
