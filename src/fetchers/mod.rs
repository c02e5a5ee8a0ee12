pub mod fetcher;
pub mod form;
pub mod http_fetcher;
pub mod mock_fetcher;

#[cfg(test)]
mod tests;

pub use fetcher::{error_marker, Fetcher};
pub use form::{fill_search_form, FormMethod, FormSubmission};
pub use http_fetcher::HttpFetcher;
pub use mock_fetcher::{MockFetcher, MockResponse};
