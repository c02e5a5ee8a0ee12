use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use url::Url;

use super::Fetcher;
use crate::http::{CaseQuery, FetchedPage};
use crate::{CaseError, CaseResult};

#[derive(Clone, Debug)]
pub enum MockResponse {
    Page(String),
    Failure(String),
}

/// Replays canned pages in order, cycling when exhausted.
#[derive(Clone)]
pub struct MockFetcher {
    court_url: String,
    responses: Arc<Vec<MockResponse>>,
    current_response: Arc<AtomicUsize>,
    received: Arc<Mutex<Vec<CaseQuery>>>,
}

impl MockFetcher {
    pub fn new(court_url: &str, responses: Vec<MockResponse>) -> Self {
        Self {
            court_url: court_url.to_string(),
            responses: Arc::new(responses),
            current_response: Arc::new(AtomicUsize::new(0)),
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn received(&self) -> Vec<CaseQuery> {
        self.received.lock().clone()
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn fetch(&self, query: &CaseQuery) -> CaseResult<FetchedPage> {
        self.received.lock().push(query.clone());

        if self.responses.is_empty() {
            return Err(CaseError::FetchError("no mock responses configured".to_string()));
        }
        let index = self.current_response.fetch_add(1, Ordering::SeqCst);

        match &self.responses[index % self.responses.len()] {
            MockResponse::Page(body) => Ok(FetchedPage {
                url: Url::parse(&self.court_url)?,
                status: 200,
                body: body.clone(),
                timestamp: Utc::now(),
            }),
            MockResponse::Failure(reason) => Err(CaseError::FetchError(reason.clone())),
        }
    }

    fn court_url(&self) -> &str {
        &self.court_url
    }
}
