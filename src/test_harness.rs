//! Shared fixtures for unit tests.
//!
//! Builders for commit payloads and raw entries with terse timestamps, plus
//! buffer capture for view tests.

use crate::model::{CommitOrder, CommitPayload, RawEntry, UpstreamProject, VersionId};
use chrono::{DateTime, Utc};

/// Parse an RFC 3339 timestamp.
pub fn ts(raw: &str) -> DateTime<Utc> {
    raw.parse().expect("valid RFC 3339 timestamp")
}

/// Commit payload with the given order and creation time.
pub fn payload(order: i64, create_time: &str) -> CommitPayload {
    CommitPayload {
        id: VersionId::new(format!("version_{order}")).expect("valid id"),
        revision: format!("{order:07x}deadbeef"),
        create_time: ts(create_time),
        author: format!("author{order}"),
        message: format!("commit {order}"),
        order: CommitOrder::new(order),
        upstream_project: None,
    }
}

/// Commit payload that was triggered by an upstream project.
pub fn upstream_payload(order: i64, create_time: &str) -> CommitPayload {
    CommitPayload {
        upstream_project: Some(UpstreamProject {
            owner: "evergreen-ci".to_string(),
            repo: "upstream".to_string(),
            revision: "cafef00d".to_string(),
            project: "upstream-project".to_string(),
            trigger_id: "trigger-1".to_string(),
            trigger_type: "task".to_string(),
        }),
        ..payload(order, create_time)
    }
}

/// Single-commit raw entry.
pub fn commit(order: i64, create_time: &str) -> RawEntry {
    RawEntry::commit(payload(order, create_time))
}

/// Rolled-up raw entry from `(order, create_time)` pairs.
pub fn rolled_up(commits: &[(i64, &str)]) -> RawEntry {
    RawEntry::rolled_up(
        commits
            .iter()
            .map(|(order, time)| payload(*order, time))
            .collect(),
    )
}

/// Raw entry with neither defining field.
pub fn malformed() -> RawEntry {
    RawEntry::default()
}

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Empty trailing lines are removed to keep snapshots clean.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}
