#![no_main]

//! Fuzz target for GitHub API payloads
//!
//! Arbitrary bytes decoded as commit or issue listings must never panic,
//! and every decoded item must either convert or report a missing field.

use ghtl_github::api::{Issue, RepoCommit};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(commits) = serde_json::from_slice::<Vec<RepoCommit>>(data) {
        for commit in commits {
            if let Ok(event) = commit.into_event() {
                assert!(!event.message().contains('\n'));
            }
        }
    }

    if let Ok(issues) = serde_json::from_slice::<Vec<Issue>>(data) {
        for issue in issues {
            let is_pr = issue.is_pull_request();
            if let Ok(event) = issue.into_event() {
                assert!(event.number().is_some());
                assert_eq!(event.kind().label() == "pull_request", is_pr);
            }
        }
    }
});
