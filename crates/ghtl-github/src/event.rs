//! Normalized repository activity events

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Replace every newline with a single space
///
/// The result has the same number of characters as the input and contains
/// no `\n`.
#[must_use]
pub fn flatten(s: &str) -> String {
    s.replace('\n', " ")
}

/// What kind of activity an [`Event`] records
///
/// Issue and pull request numbers live inside their variants, so a commit
/// can never carry a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventKind {
    /// A commit on the default branch
    Commit,
    /// An issue
    Issue {
        /// Issue number
        number: u64,
    },
    /// A pull request
    PullRequest {
        /// Pull request number
        number: u64,
    },
}

impl EventKind {
    /// Short machine-readable label
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Commit => "commit",
            Self::Issue { .. } => "issue",
            Self::PullRequest { .. } => "pull_request",
        }
    }

    /// Issue or pull request number (None for commits)
    #[must_use]
    pub fn number(&self) -> Option<u64> {
        match self {
            Self::Commit => None,
            Self::Issue { number } | Self::PullRequest { number } => Some(*number),
        }
    }
}

/// A single commit, issue or pull request creation
///
/// Only the constructors build events, so a commit message is always a
/// single line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    created_at: DateTime<Utc>,
    kind: EventKind,
    message: String,
}

impl Event {
    /// Create a commit event; the message is flattened to one line
    #[must_use]
    pub fn commit(created_at: DateTime<Utc>, message: &str) -> Self {
        Self {
            created_at,
            kind: EventKind::Commit,
            message: flatten(message),
        }
    }

    /// Create an issue event
    #[must_use]
    pub fn issue(created_at: DateTime<Utc>, number: u64, title: impl Into<String>) -> Self {
        Self {
            created_at,
            kind: EventKind::Issue { number },
            message: title.into(),
        }
    }

    /// Create a pull request event
    #[must_use]
    pub fn pull_request(
        created_at: DateTime<Utc>,
        number: u64,
        title: impl Into<String>,
    ) -> Self {
        Self {
            created_at,
            kind: EventKind::PullRequest { number },
            message: title.into(),
        }
    }

    /// When the activity happened
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// The kind of activity
    #[must_use]
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Commit message (flattened) or issue/PR title
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Issue or pull request number
    #[must_use]
    pub fn number(&self) -> Option<u64> {
        self.kind.number()
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: flattening removes every newline
        #[test]
        fn prop_flatten_has_no_newlines(s in ".*(\n.*){0,5}") {
            prop_assert!(!flatten(&s).contains('\n'));
        }

        /// Property: flattening preserves the character count
        #[test]
        fn prop_flatten_preserves_length(s in "[a-z \n]{0,64}") {
            let newlines = s.matches('\n').count();
            let flat = flatten(&s);
            prop_assert_eq!(flat.chars().count(), s.chars().count());
            prop_assert_eq!(
                flat.matches(' ').count(),
                s.matches(' ').count() + newlines
            );
        }

        /// Property: number is present iff the event is not a commit
        #[test]
        fn prop_number_iff_not_commit(n in 0u64..100_000, pick in 0u8..3) {
            let created_at = DateTime::from_timestamp(0, 0).unwrap_or_else(Utc::now);
            let e = match pick {
                0 => Event::commit(created_at, "msg"),
                1 => Event::issue(created_at, n, "msg"),
                _ => Event::pull_request(created_at, n, "msg"),
            };
            prop_assert_eq!(e.number().is_some(), e.kind() != EventKind::Commit);
        }
    }
}
