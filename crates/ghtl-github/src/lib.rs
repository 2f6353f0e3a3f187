// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! ghtl-github: GitHub activity fetching for ghtl
//!
//! This library crate fetches commits, issues and pull requests from the
//! GitHub REST API and normalizes them into [`Event`] records.

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use ghtl_github::{FetchOptions, GitHubClient};
//!
//! # async fn demo() -> Result<(), ghtl_github::FetchError> {
//! let client = GitHubClient::new(FetchOptions::default())?;
//! let commits = client.fetch_commits("rust-lang", "rust").await?;
//!
//! for e in commits {
//!     println!("{} {}", e.created_at(), e.message());
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod error;
pub mod event;

pub use client::{DEFAULT_API_URL, FetchOptions, GitHubClient};
pub use error::FetchError;
pub use event::{Event, EventKind, flatten};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::client::{FetchOptions, GitHubClient};
    pub use crate::error::FetchError;
    pub use crate::event::{Event, EventKind};
}
