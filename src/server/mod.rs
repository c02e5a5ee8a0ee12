//! Web front end: search form, result pages and report downloads.

mod handlers;
mod routes;


pub use routes::create_router;

use log::info;
use std::net::SocketAddr;
use std::sync::Arc;

use crate::core::{CaseError, CaseResult, CaseService};

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<CaseService>,
    pub court_url: String,
    pub recent_limit: usize,
}

impl AppState {
    pub fn new(service: Arc<CaseService>, court_url: impl Into<String>) -> Self {
        Self {
            service,
            court_url: court_url.into(),
            recent_limit: 20,
        }
    }
}

/// Start the web server and run until it fails.
pub async fn serve(state: AppState, host: &str, port: u16) -> CaseResult<()> {
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .map_err(|e| CaseError::ConfigError(format!("bind address {}:{}: {}", host, port, e)))?;
    info!("App running at http://{}/", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
