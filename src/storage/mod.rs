pub mod disk;
pub mod sqlite;
pub mod types;

pub use disk::ReportStore;
pub use sqlite::QueryStore;
pub use types::{NewQuery, QueryRecord, QuerySummary};
