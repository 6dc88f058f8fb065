//! Timeline Builder - folds a page of raw entries into the row sequence.
//!
//! Extension is append-only: rows already in the sequence are never mutated,
//! reordered or removed, so row indices handed out earlier stay valid.

use crate::model::{CommitOrder, NonEmptyCommits, RawEntry, TimelineError};
use crate::timeline::{classify_entry, is_same_day_in, ClassifiedEntry, Row};
use chrono::{Local, TimeZone};
use tracing::{debug, warn};

/// Result of extending the row sequence with one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extension {
    /// The extended sequence (the input rows followed by the new suffix).
    pub rows: Vec<Row>,
    /// Entries that were skipped, in page order.
    pub skipped: Vec<TimelineError>,
}

impl Extension {
    /// Number of skipped entries.
    pub fn warning_count(&self) -> usize {
        self.skipped.len()
    }
}

/// Builds timeline rows, comparing calendar days in time zone `Tz`.
#[derive(Debug, Clone)]
pub struct TimelineBuilder<Tz: TimeZone = Local> {
    tz: Tz,
}

impl TimelineBuilder<Local> {
    /// Builder using the host's local calendar.
    pub fn local() -> Self {
        Self { tz: Local }
    }
}

impl Default for TimelineBuilder<Local> {
    fn default() -> Self {
        Self::local()
    }
}

impl<Tz: TimeZone> TimelineBuilder<Tz> {
    /// Builder comparing days in `tz`.
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// The builder's calendar.
    pub fn timezone(&self) -> &Tz {
        &self.tz
    }

    /// Append the rows for `entries` to `rows`.
    ///
    /// Entries are processed strictly in order. Each valid entry becomes one row,
    /// preceded by a date separator when the sequence is empty or the previous
    /// row falls on a different calendar day. A commit row is selected when its
    /// order equals `selected`.
    ///
    /// A malformed entry or an empty rolled-up group is skipped and reported in
    /// [`Extension::skipped`]; rows appended before and after it are kept.
    ///
    /// An empty page returns `rows` untouched (the same allocation).
    pub fn extend<I>(&self, mut rows: Vec<Row>, entries: I, selected: Option<CommitOrder>) -> Extension
    where
        I: IntoIterator<Item = RawEntry>,
    {
        let start_len = rows.len();
        let mut skipped = Vec::new();

        for (position, entry) in entries.into_iter().enumerate() {
            let row = match self.build_row(position, entry, selected) {
                Ok(row) => row,
                Err(err) => {
                    warn!(position, error = %err, "Skipping timeline entry");
                    skipped.push(err);
                    continue;
                }
            };

            let needs_separator = match rows.last() {
                Some(prior) => !is_same_day_in(row.date(), prior.date(), &self.tz),
                None => true,
            };
            if needs_separator {
                rows.push(Row::DateSeparator { date: *row.date() });
            }
            rows.push(row);
        }

        debug!(
            appended = rows.len() - start_len,
            skipped = skipped.len(),
            total = rows.len(),
            "Extended timeline"
        );

        Extension { rows, skipped }
    }

    fn build_row(
        &self,
        position: usize,
        entry: RawEntry,
        selected: Option<CommitOrder>,
    ) -> Result<Row, TimelineError> {
        let classified = classify_entry(entry)
            .map_err(|shape| TimelineError::MalformedEntry { position, shape })?;

        match classified {
            ClassifiedEntry::Commit(commit) => Ok(Row::Commit {
                date: commit.create_time,
                selected: selected == Some(commit.order),
                commit,
            }),
            ClassifiedEntry::RolledUp(versions) => {
                let commits = NonEmptyCommits::new(versions)
                    .map_err(|_| TimelineError::EmptyRolledUpGroup { position })?;
                // Later commits in the group are not consulted, even across days.
                Ok(Row::FoldedGroup {
                    date: commits.first().create_time,
                    commits,
                    selected: false,
                })
            }
        }
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
