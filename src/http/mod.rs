pub(crate) mod request;
pub(crate) mod response;

pub use request::CaseQuery;
pub use response::FetchedPage;
