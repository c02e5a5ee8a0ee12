use super::ExtractedRecord;

/// A fetched page as stored: possibly real HTML, possibly an error marker.
#[derive(Debug, Clone, Copy)]
pub struct RawDocument<'a> {
    pub html: &'a str,
    /// Used to resolve relative links; empty means no resolution.
    pub base_url: Option<&'a str>,
}

impl<'a> RawDocument<'a> {
    pub fn new(html: &'a str, base_url: Option<&'a str>) -> Self {
        Self { html, base_url }
    }
}

/// Turns a raw document into labeled evidence. Implementations never fail.
pub trait Extractor: Send + Sync {
    fn extract(&self, document: RawDocument<'_>) -> ExtractedRecord;
}
