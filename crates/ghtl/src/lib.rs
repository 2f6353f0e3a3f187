//! ghtl library
//!
//! This module exports the configuration, the timeline assembler and the
//! run pipeline for use by the binary and by integration tests.

use std::io::Write;

use anyhow::Context;
use ghtl_github::GitHubClient;
use tracing::info;

pub mod config;
pub mod timeline;

use config::Config;
use timeline::Timeline;

/// Fetch, merge and print the timeline for the configured repository
///
/// Commits are fetched first. Issues and pull requests are only fetched if
/// that succeeds, and nothing is written to `out` unless both fetches do.
/// Returns the number of lines written.
///
/// # Errors
///
/// Returns an error if either fetch fails or writing to `out` fails.
pub async fn run<W: Write>(config: &Config, out: &mut W, color: bool) -> anyhow::Result<usize> {
    let client = GitHubClient::new(config.fetch_options())?;
    let slug = config.slug();

    let commits = client
        .fetch_commits(&config.owner, &config.repository)
        .await
        .with_context(|| format!("fetching commits for {slug}"))?;

    let issues = client
        .fetch_issues(&config.owner, &config.repository)
        .await
        .with_context(|| format!("fetching issues for {slug}"))?;

    let timeline = Timeline::assemble(commits, issues);
    info!(repository = %slug, events = timeline.len(), "timeline assembled");

    timeline
        .render(out, color)
        .context("writing timeline")?;
    out.flush().context("writing timeline")?;

    Ok(timeline.len())
}
