use crate::http::{CaseQuery, FetchedPage};
use crate::{CaseError, CaseResult};
use async_trait::async_trait;

pub const ERROR_MARKER_PREFIX: &str = "ERROR: ";

/// Retrieves the result page of a case search.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, query: &CaseQuery) -> CaseResult<FetchedPage>;

    /// Court the searches are sent to; stored with every query.
    fn court_url(&self) -> &str;
}

/// Text stored in place of HTML when a fetch fails.
pub fn error_marker(error: &CaseError) -> String {
    format!("{}{}", ERROR_MARKER_PREFIX, error)
}
