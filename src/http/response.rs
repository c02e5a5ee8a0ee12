use chrono::{DateTime, Utc};
use url::Url;

/// Result page of a case search.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects, used as the base for relative links.
    pub url: Url,
    pub status: u16,
    pub body: String,
    /// When the page arrived.
    pub timestamp: DateTime<Utc>,
}
