use thiserror::Error;

#[derive(Error, Debug)]
pub enum CaseError {
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("URL parsing error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    DatabaseError(#[from] rusqlite::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Fetch failed: {0}")]
    FetchError(String),

    #[error("Background task failed: {0}")]
    TaskError(#[from] tokio::task::JoinError),

    #[error("Unexpected status {status} from {url}")]
    StatusError { status: u16, url: String },
}

impl From<toml::de::Error> for CaseError {
    fn from(err: toml::de::Error) -> Self {
        CaseError::ConfigError(err.to_string())
    }
}

pub type CaseResult<T> = Result<T, CaseError>;
