mod errors;
mod service;
mod settings;

pub use errors::{CaseError, CaseResult};
pub use service::{truncate_chars, CaseService, CaseView, ExportedReport};
pub use settings::{Settings, DEFAULT_COURT_URL};
