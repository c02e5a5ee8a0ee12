use crate::core::{CaseError, CaseResult};
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_COURT_URL: &str = "https://delhihighcourt.nic.in/case.asp";
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Runtime settings. Every field has a default so a partial TOML file is
/// enough; CLI flags are applied afterwards through the `with_*` builders.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub court_url: String,
    pub database_path: PathBuf,
    pub downloads_dir: PathBuf,
    pub fetch_timeout_secs: u64,
    pub user_agent: String,
    /// Raw HTML is cut to this many characters before it is stored.
    pub max_stored_chars: usize,
    pub host: String,
    pub port: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            court_url: DEFAULT_COURT_URL.to_string(),
            database_path: PathBuf::from("data/queries.db"),
            downloads_dir: PathBuf::from("downloads"),
            fetch_timeout_secs: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_stored_chars: 10_000,
            host: "0.0.0.0".to_string(),
            port: 7860,
        }
    }
}

impl Settings {
    pub fn from_file<P: AsRef<Path>>(path: P) -> CaseResult<Self> {
        let path = path.as_ref();
        debug!("Loading settings from {}", path.display());
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> CaseResult<Self> {
        let settings: Settings = toml::from_str(raw)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> CaseResult<()> {
        url::Url::parse(&self.court_url)
            .map_err(|e| CaseError::ConfigError(format!("court_url '{}': {}", self.court_url, e)))?;
        if self.max_stored_chars == 0 {
            return Err(CaseError::ConfigError(
                "max_stored_chars must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    pub fn with_court_url(mut self, url: impl Into<String>) -> Self {
        self.court_url = url.into();
        self
    }

    pub fn with_database_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.database_path = path.into();
        self
    }

    pub fn with_downloads_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.downloads_dir = path.into();
        self
    }

    pub fn with_fetch_timeout(mut self, secs: u64) -> Self {
        self.fetch_timeout_secs = secs;
        self
    }

    pub fn with_max_stored_chars(mut self, max: usize) -> Self {
        self.max_stored_chars = max;
        self
    }

    pub fn with_bind(mut self, host: impl Into<String>, port: u16) -> Self {
        self.host = host.into();
        self.port = port;
        self
    }
}
