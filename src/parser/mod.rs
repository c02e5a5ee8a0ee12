pub mod base;
pub mod config;
pub mod html;
pub mod record;

pub use base::{Extractor, RawDocument};
pub use config::ExtractorConfig;
pub use html::{extract_fields, HtmlExtractor};
pub use record::{ExtractedRecord, FieldValue};
