//! Row Classifier.

use crate::model::{CommitPayload, EntryShape, RawEntry};

/// Kind of a row in the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKind {
    /// Day heading inserted between commits of different days.
    DateSeparator,
    /// One mainline commit.
    Commit,
    /// Rolled-up inactive commits.
    FoldedCommits,
}

/// A raw entry whose shape has been validated, carrying its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedEntry {
    /// Entry carrying `version`.
    Commit(CommitPayload),
    /// May still be empty; group emptiness is checked when the row is built.
    RolledUp(Vec<CommitPayload>),
}

impl ClassifiedEntry {
    /// Row kind this entry becomes.
    pub fn kind(&self) -> RowKind {
        match self {
            ClassifiedEntry::Commit(_) => RowKind::Commit,
            ClassifiedEntry::RolledUp(_) => RowKind::FoldedCommits,
        }
    }
}

/// Determine which row kind an entry becomes without consuming it.
///
/// # Errors
///
/// Returns the offending [`EntryShape`] when the entry has both or neither of
/// `version` and `rolledUpVersions`.
pub fn classify(entry: &RawEntry) -> Result<RowKind, EntryShape> {
    match (&entry.version, &entry.rolled_up_versions) {
        (Some(_), None) => Ok(RowKind::Commit),
        (None, Some(_)) => Ok(RowKind::FoldedCommits),
        (Some(_), Some(_)) => Err(EntryShape::Both),
        (None, None) => Err(EntryShape::Neither),
    }
}

/// Classify an entry, moving its payload out.
pub fn classify_entry(entry: RawEntry) -> Result<ClassifiedEntry, EntryShape> {
    match (entry.version, entry.rolled_up_versions) {
        (Some(version), None) => Ok(ClassifiedEntry::Commit(version)),
        (None, Some(versions)) => Ok(ClassifiedEntry::RolledUp(versions)),
        (Some(_), Some(_)) => Err(EntryShape::Both),
        (None, None) => Err(EntryShape::Neither),
    }
}
