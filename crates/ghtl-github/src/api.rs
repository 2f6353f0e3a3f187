// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! GitHub REST API wire types
//!
//! Only the fields the timeline needs are modelled. Fields that the API
//! normally always returns are still `Option` so that a malformed item
//! surfaces as [`FetchError::MissingField`] instead of a decode error for
//! the whole page.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::FetchError;
use crate::event::Event;

/// An item of `GET /repos/{owner}/{repo}/commits`
#[derive(Debug, Clone, Deserialize)]
pub struct RepoCommit {
    /// Commit SHA
    #[serde(default)]
    pub sha: Option<String>,
    /// Git commit data
    #[serde(default)]
    pub commit: Option<GitCommit>,
}

/// The `commit` object nested in a [`RepoCommit`]
#[derive(Debug, Clone, Deserialize)]
pub struct GitCommit {
    /// Commit author identity
    #[serde(default)]
    pub author: Option<GitSignature>,
    /// Full commit message
    #[serde(default)]
    pub message: Option<String>,
}

/// Author or committer signature
#[derive(Debug, Clone, Deserialize)]
pub struct GitSignature {
    /// Author name
    #[serde(default)]
    pub name: Option<String>,
    /// Authoring date
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

/// An item of `GET /repos/{owner}/{repo}/issues`
#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    /// Issue or pull request number
    #[serde(default)]
    pub number: Option<u64>,
    /// Title
    #[serde(default)]
    pub title: Option<String>,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Present (and non-null) only for pull requests
    #[serde(default)]
    pub pull_request: Option<PullRequestLinks>,
}

/// Marker object GitHub attaches to pull requests in the issues listing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PullRequestLinks {
    /// API URL of the pull request
    #[serde(default)]
    pub url: Option<String>,
}

/// Error body returned by the API on failure
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    /// Human-readable message
    pub message: String,
}

impl RepoCommit {
    fn describe(&self) -> String {
        match self.sha.as_deref() {
            Some(sha) => format!("commit {}", sha.chars().take(7).collect::<String>()),
            None => "commit <unknown sha>".to_string(),
        }
    }

    /// Convert into a commit [`Event`]
    ///
    /// # Errors
    ///
    /// Returns `FetchError::MissingField` if the author date or message is absent.
    pub fn into_event(self) -> Result<Event, FetchError> {
        let item = self.describe();
        let commit = self.commit.ok_or_else(|| FetchError::MissingField {
            field: "commit",
            item: item.clone(),
        })?;
        let date = commit
            .author
            .and_then(|a| a.date)
            .ok_or_else(|| FetchError::MissingField {
                field: "commit.author.date",
                item: item.clone(),
            })?;
        let message = commit.message.ok_or(FetchError::MissingField {
            field: "commit.message",
            item,
        })?;
        Ok(Event::commit(date, &message))
    }
}

impl Issue {
    /// Whether GitHub marks this item as a pull request
    #[must_use]
    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }

    fn describe(&self) -> String {
        match self.number {
            Some(n) => format!("issue #{n}"),
            None => "issue <unknown number>".to_string(),
        }
    }

    /// Convert into an issue or pull request [`Event`]
    ///
    /// # Errors
    ///
    /// Returns `FetchError::MissingField` if the number, title or creation
    /// time is absent.
    pub fn into_event(self) -> Result<Event, FetchError> {
        let item = self.describe();
        let is_pr = self.is_pull_request();
        let number = self.number.ok_or_else(|| FetchError::MissingField {
            field: "number",
            item: item.clone(),
        })?;
        let created_at = self.created_at.ok_or_else(|| FetchError::MissingField {
            field: "created_at",
            item: item.clone(),
        })?;
        let title = self.title.ok_or(FetchError::MissingField {
            field: "title",
            item,
        })?;
        Ok(if is_pr {
            Event::pull_request(created_at, number, title)
        } else {
            Event::issue(created_at, number, title)
        })
    }
}
