// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Timeline assembly and rendering
//!
//! Commits and issue/pull request events are merged into one sequence,
//! sorted oldest first, and written one line per event.

use std::io::{self, Write};

use crossterm::style::{Color, Stylize};
use ghtl_github::{Event, EventKind};

/// Timestamp layout used on every line
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Indent that lines commits up with `#NN ` prefixes
const COMMIT_INDENT: &str = "    ";

/// A merged, time-ordered sequence of events for one repository
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timeline {
    events: Vec<Event>,
}

impl Timeline {
    /// Merge commit and issue events and sort them by creation time
    ///
    /// The sort is stable: events with equal timestamps keep their input
    /// order, commits before issues.
    #[must_use]
    pub fn assemble(commits: Vec<Event>, issues: Vec<Event>) -> Self {
        let mut events = commits;
        events.extend(issues);
        events.sort_by_key(Event::created_at);
        Self { events }
    }

    /// Events in timeline order
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Number of events
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the timeline has no events
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Write every event as one line
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn render<W: Write>(&self, out: &mut W, color: bool) -> io::Result<()> {
        for event in &self.events {
            writeln!(out, "{}", render_event(event, color))?;
        }
        Ok(())
    }
}

/// Foreground color for each kind of event
#[must_use]
pub fn kind_color(kind: EventKind) -> Color {
    match kind {
        EventKind::Commit => Color::Yellow,
        EventKind::Issue { .. } => Color::Magenta,
        EventKind::PullRequest { .. } => Color::Cyan,
    }
}

/// Format a single event as one line, without the trailing newline
#[must_use]
pub fn render_event(event: &Event, color: bool) -> String {
    let ts = event.created_at().format(TIMESTAMP_FORMAT);
    let line = match event.kind() {
        EventKind::Commit => format!("{COMMIT_INDENT}{ts} {}", event.message()),
        EventKind::Issue { number } | EventKind::PullRequest { number } => {
            format!("#{number:02} {ts} {}", event.message())
        }
    };

    if color {
        line.with(kind_color(event.kind())).to_string()
    } else {
        line
    }
}
