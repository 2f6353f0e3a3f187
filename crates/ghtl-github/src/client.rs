// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Anonymous GitHub REST API client
//!
//! This module fetches commit and issue listings for a repository and
//! normalizes every item into an [`Event`]. Requests are issued one at a
//! time; the first failure aborts the fetch and discards what was gathered.

use reqwest::{StatusCode, Url};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::api::{ApiErrorBody, Issue, RepoCommit};
use crate::error::FetchError;
use crate::event::Event;

/// Public GitHub API endpoint
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const USER_AGENT: &str = concat!("ghtl/", env!("CARGO_PKG_VERSION"));

/// Paging and endpoint settings for a fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    /// API base URL, without trailing slash
    pub api_url: String,
    /// Items requested per page (GitHub caps this at 100)
    pub per_page: u32,
    /// Maximum number of pages requested per endpoint
    pub max_pages: u32,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            per_page: 100,
            max_pages: 1,
        }
    }
}

impl FetchOptions {
    /// Use a different API base URL
    #[must_use]
    pub fn with_api_url(mut self, url: &str) -> Self {
        self.api_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Allow up to `pages` pages per endpoint
    #[must_use]
    pub fn with_max_pages(mut self, pages: u32) -> Self {
        self.max_pages = pages.max(1);
        self
    }
}

/// GitHub client wrapper for fetching repository activity
pub struct GitHubClient {
    http: reqwest::Client,
    options: FetchOptions,
}

impl GitHubClient {
    /// Create a client with the given options
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Http` if the underlying HTTP client cannot be built.
    pub fn new(options: FetchOptions) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "x-github-api-version",
            HeaderValue::from_static("2022-11-28"),
        );

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self { http, options })
    }

    /// The options this client was built with
    #[must_use]
    pub fn options(&self) -> &FetchOptions {
        &self.options
    }

    /// Fetch recent commits as commit events
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if any request fails or any commit lacks an
    /// author date or message.
    #[instrument(skip(self))]
    pub async fn fetch_commits(&self, owner: &str, repo: &str) -> Result<Vec<Event>, FetchError> {
        let url = self.endpoint(owner, repo, "commits")?;
        let commits: Vec<RepoCommit> = self.get_pages(&url, &[]).await?;
        debug!(count = commits.len(), "fetched commits");
        commits.into_iter().map(RepoCommit::into_event).collect()
    }

    /// Fetch recent issues and pull requests in any state
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if any request fails or any item lacks a number,
    /// title or creation time.
    #[instrument(skip(self))]
    pub async fn fetch_issues(&self, owner: &str, repo: &str) -> Result<Vec<Event>, FetchError> {
        let url = self.endpoint(owner, repo, "issues")?;
        let issues: Vec<Issue> = self.get_pages(&url, &[("state", "all")]).await?;
        debug!(count = issues.len(), "fetched issues and pull requests");
        issues.into_iter().map(Issue::into_event).collect()
    }

    /// `{api}/repos/{owner}/{repo}/{resource}` with each segment percent-encoded
    fn endpoint(&self, owner: &str, repo: &str, resource: &str) -> Result<Url, FetchError> {
        let invalid = || FetchError::InvalidUrl(self.options.api_url.clone());
        let mut url = Url::parse(&self.options.api_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .extend(["repos", owner, repo, resource]);
        Ok(url)
    }

    /// Request consecutive pages until a short page or the page limit
    async fn get_pages<T: DeserializeOwned>(
        &self,
        url: &Url,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>, FetchError> {
        let per_page = self.options.per_page.to_string();
        let mut items = Vec::new();

        for page in 1..=self.options.max_pages {
            let page_str = page.to_string();
            debug!(%url, page, "requesting page");

            let response = self
                .http
                .get(url.clone())
                .query(query)
                .query(&[("per_page", per_page.as_str()), ("page", page_str.as_str())])
                .send()
                .await?;

            let batch: Vec<T> = Self::decode(response).await?;
            let short = batch.len() < self.options.per_page as usize;
            items.extend(batch);
            if short {
                break;
            }
        }

        Ok(items)
    }

    /// Turn a response into a decoded body or the matching error
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, FetchError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        if is_rate_limited(status, response.headers()) {
            let reset = response
                .headers()
                .get("x-ratelimit-reset")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            warn!(?reset, "rate limit exhausted");
            return Err(FetchError::RateLimited { reset });
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .map(|b| b.message)
            .unwrap_or(body);
        Err(FetchError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

fn is_rate_limited(status: StatusCode, headers: &HeaderMap) -> bool {
    let exhausted = headers
        .get("x-ratelimit-remaining")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.trim() == "0");
    (status == StatusCode::FORBIDDEN || status == StatusCode::TOO_MANY_REQUESTS) && exhausted
}
