//! The unit of the output sequence.

use crate::model::{CommitOrder, CommitPayload, NonEmptyCommits};
use crate::timeline::RowKind;
use chrono::{DateTime, Utc};

/// One display row of the timeline.
///
/// `date` is the row's anchor date: the commit's creation time, or for a folded
/// group the creation time of its first commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    /// Start of a new calendar day.
    DateSeparator {
        /// Creation time of the commit that opened the day.
        date: DateTime<Utc>,
    },
    /// A single mainline commit.
    Commit {
        /// The commit.
        commit: CommitPayload,
        /// Its creation time.
        date: DateTime<Utc>,
        /// Whether this is the highlighted commit.
        selected: bool,
    },
    /// Rolled-up inactive commits behind a fold toggle.
    FoldedGroup {
        /// The group, in source order.
        commits: NonEmptyCommits,
        /// Creation time of the first commit.
        date: DateTime<Utc>,
        /// Always false when built; selection targets individual commits only.
        selected: bool,
    },
}

impl Row {
    /// Anchor time of the row.
    pub fn date(&self) -> &DateTime<Utc> {
        match self {
            Row::DateSeparator { date }
            | Row::Commit { date, .. }
            | Row::FoldedGroup { date, .. } => date,
        }
    }

    /// Kind of the row.
    pub fn kind(&self) -> RowKind {
        match self {
            Row::DateSeparator { .. } => RowKind::DateSeparator,
            Row::Commit { .. } => RowKind::Commit,
            Row::FoldedGroup { .. } => RowKind::FoldedCommits,
        }
    }

    /// Whether the row is highlighted.
    pub fn is_selected(&self) -> bool {
        match self {
            Row::DateSeparator { .. } => false,
            Row::Commit { selected, .. } | Row::FoldedGroup { selected, .. } => *selected,
        }
    }

    /// Order of the row's commit, for single-commit rows.
    pub fn commit_order(&self) -> Option<CommitOrder> {
        match self {
            Row::Commit { commit, .. } => Some(commit.order),
            Row::DateSeparator { .. } | Row::FoldedGroup { .. } => None,
        }
    }

    /// True for day separators.
    pub fn is_separator(&self) -> bool {
        matches!(self, Row::DateSeparator { .. })
    }
}
