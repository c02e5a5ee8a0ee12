use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info, warn};
use reqwest::{Client, ClientBuilder, Response};
use std::time::Duration;
use url::Url;

use super::form::{fill_search_form, FormMethod};
use super::Fetcher;
use crate::core::Settings;
use crate::http::{CaseQuery, FetchedPage};
use crate::{CaseError, CaseResult};

/// Drives the court's search form over plain HTTP, keeping session cookies
/// between the landing page and the submission.
#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
    court_url: Url,
    court_url_raw: String,
}

impl HttpFetcher {
    pub fn new(court_url: &str, timeout: Duration, user_agent: &str) -> CaseResult<Self> {
        let parsed = Url::parse(court_url)?;
        let client = ClientBuilder::new()
            .user_agent(user_agent)
            .timeout(timeout)
            .cookie_store(true)
            .build()?;

        Ok(Self {
            client,
            court_url: parsed,
            court_url_raw: court_url.to_string(),
        })
    }

    pub fn from_settings(settings: &Settings) -> CaseResult<Self> {
        Self::new(
            &settings.court_url,
            settings.fetch_timeout(),
            &settings.user_agent,
        )
    }

    async fn into_page(response: Response) -> CaseResult<FetchedPage> {
        let url = response.url().clone();
        let status = response.status().as_u16();
        let body = response.text().await?;

        if status >= 400 {
            warn!("Court answered {} for {}", status, url);
        }

        Ok(FetchedPage {
            url,
            status,
            body,
            timestamp: Utc::now(),
        })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, query: &CaseQuery) -> CaseResult<FetchedPage> {
        info!("Searching {} for {}", self.court_url, query.label());

        let landing = self.client.get(self.court_url.clone()).send().await?;
        if !landing.status().is_success() {
            return Err(CaseError::StatusError {
                status: landing.status().as_u16(),
                url: landing.url().to_string(),
            });
        }
        let landing = Self::into_page(landing).await?;
        debug!(
            "Landing page {} returned {} bytes",
            landing.url,
            landing.body.len()
        );

        let Some(submission) = fill_search_form(&landing.body, &landing.url, query)? else {
            warn!("No search form on {}, keeping the landing page", landing.url);
            return Ok(landing);
        };

        let request = match submission.method {
            FormMethod::Get => self
                .client
                .get(submission.action.clone())
                .query(&submission.fields),
            FormMethod::Post => self
                .client
                .post(submission.action.clone())
                .form(&submission.fields),
        };

        let page = Self::into_page(request.send().await?).await?;
        info!(
            "Search for {} returned status {} ({} bytes)",
            query.label(),
            page.status,
            page.body.len()
        );
        Ok(page)
    }

    fn court_url(&self) -> &str {
        &self.court_url_raw
    }
}
