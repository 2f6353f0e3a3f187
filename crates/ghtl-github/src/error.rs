// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for ghtl-github

use thiserror::Error;

/// Errors that can occur while fetching repository activity
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport or body decoding error from reqwest
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The anonymous rate limit has been exhausted
    #[error("GitHub API rate limit exceeded{}", reset_suffix(.reset))]
    RateLimited {
        /// Unix timestamp at which the limit resets, if reported
        reset: Option<i64>,
    },

    /// The API answered with a non-success status
    #[error("GitHub API error ({status}): {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Message reported by the API, or the raw body
        message: String,
    },

    /// The API base URL cannot carry a repository path
    #[error("invalid API URL: {0}")]
    InvalidUrl(String),

    /// A required field was absent in a returned item
    #[error("missing field `{field}` in {item}")]
    MissingField {
        /// Dotted path of the missing field
        field: &'static str,
        /// Description of the item that lacked it
        item: String,
    },
}

fn reset_suffix(reset: &Option<i64>) -> String {
    match reset {
        Some(ts) => format!(" (resets at unix time {ts})"),
        None => String::new(),
    }
}
