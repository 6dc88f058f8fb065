//! Row Renderer Dispatch.
//!
//! Pure mapping from a [`Row`] to a [`RenderDescriptor`]: the display fields a
//! renderer needs plus the [`RowAction`]s its clickable parts trigger. Holds no
//! state; fold state and the column limit come in through [`PresentContext`].

use crate::model::{CommitPayload, UpstreamProject};
use crate::timeline::{calendar_date_in, Row};
use crate::view_state::actions::{ClickOrigin, RowAction};
use crate::view_state::types::RowIndex;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Per-row inputs to [`present`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresentContext {
    /// Row being presented; bound into the emitted actions.
    pub index: RowIndex,
    /// Current fold flag for the row (ignored for non-folded rows).
    pub is_expanded: bool,
    /// How many commits a collapsed group previews.
    pub column_limit: usize,
}

/// What a renderer draws for one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderDescriptor<'a> {
    /// Day heading.
    DateLabel(DateLabel),
    /// Single commit row.
    Commit(CommitDescriptor<'a>),
    /// Folded group row.
    FoldedGroup(FoldedGroupDescriptor<'a>),
}

/// A day heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateLabel {
    /// Instant inside the announced day.
    pub date: DateTime<Utc>,
}

impl DateLabel {
    /// The calendar day this label announces, in `tz`.
    pub fn calendar_date<Tz: TimeZone>(&self, tz: &Tz) -> NaiveDate {
        calendar_date_in(&self.date, tz)
    }
}

/// A single commit, either a top-level row or nested inside a folded group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitDescriptor<'a> {
    /// The full payload.
    pub commit: &'a CommitPayload,
    /// Short revision hash.
    pub revision: &'a str,
    /// Commit author.
    pub author: &'a str,
    /// Commit message.
    pub message: &'a str,
    /// Triggering project, if any.
    pub upstream_project: Option<&'a UpstreamProject>,
    /// Whether this commit is highlighted.
    pub selected: bool,
    /// Ticket keys found in the message.
    pub tickets: Vec<&'a str>,
    /// Fired when the revision is clicked.
    pub open_commit: RowAction,
    /// Fired when the upstream link is clicked.
    pub open_upstream_project: Option<RowAction>,
    /// One action per entry of `tickets`, same order.
    pub open_tickets: Vec<RowAction>,
}

impl CommitDescriptor<'_> {
    /// `owner/repo@revision` of the upstream project, if any.
    pub fn upstream_link(&self) -> Option<String> {
        self.upstream_project.map(UpstreamProject::link_target)
    }
}

/// A group of rolled-up commits behind a fold toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldedGroupDescriptor<'a> {
    /// The whole group, in source order.
    pub commits: &'a [CommitPayload],
    /// The commits to draw: all of them when expanded, at most `column_limit` when collapsed.
    pub visible: Vec<CommitDescriptor<'a>>,
    /// Commits left out of `visible`.
    pub hidden: usize,
    /// Current fold flag.
    pub is_expanded: bool,
    /// Always false for groups.
    pub selected: bool,
    /// Flips the fold flag of this row.
    pub toggle: RowAction,
}

/// Map a row to its render descriptor.
pub fn present<'a>(row: &'a Row, ctx: &PresentContext) -> RenderDescriptor<'a> {
    match row {
        Row::DateSeparator { date } => RenderDescriptor::DateLabel(DateLabel { date: *date }),
        Row::Commit {
            commit, selected, ..
        } => RenderDescriptor::Commit(describe_commit(
            commit,
            ctx.index,
            ClickOrigin::Row,
            *selected,
        )),
        Row::FoldedGroup {
            commits, selected, ..
        } => {
            let shown = if ctx.is_expanded {
                commits.len()
            } else {
                ctx.column_limit.min(commits.len())
            };
            let visible = commits.as_slice()[..shown]
                .iter()
                .map(|commit| describe_commit(commit, ctx.index, ClickOrigin::FoldedGroup, false))
                .collect();

            RenderDescriptor::FoldedGroup(FoldedGroupDescriptor {
                commits: commits.as_slice(),
                visible,
                hidden: commits.len() - shown,
                is_expanded: ctx.is_expanded,
                selected: *selected,
                toggle: RowAction::ToggleFold {
                    index: ctx.index,
                    expanded: !ctx.is_expanded,
                },
            })
        }
    }
}

fn describe_commit(
    commit: &CommitPayload,
    index: RowIndex,
    origin: ClickOrigin,
    selected: bool,
) -> CommitDescriptor<'_> {
    let tickets = commit.ticket_references();
    let open_tickets = tickets
        .iter()
        .map(|ticket| RowAction::OpenTicket {
            index,
            origin,
            ticket: (*ticket).to_string(),
        })
        .collect();

    CommitDescriptor {
        commit,
        revision: commit.short_revision(),
        author: &commit.author,
        message: &commit.message,
        upstream_project: commit.upstream_project.as_ref(),
        selected,
        tickets,
        open_commit: RowAction::OpenCommit {
            index,
            origin,
            version_id: commit.id.clone(),
        },
        open_upstream_project: commit.upstream_project.as_ref().map(|upstream| {
            RowAction::OpenUpstreamProject {
                index,
                origin,
                upstream: upstream.clone(),
            }
        }),
        open_tickets,
    }
}

#[cfg(test)]
#[path = "present_tests.rs"]
mod tests;
