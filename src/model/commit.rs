//! Commit payloads as delivered by the history source.

use crate::model::{CommitOrder, VersionId};
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// A single mainline commit (one version of the project).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitPayload {
    /// Version identifier, used to open the version page.
    pub id: VersionId,
    /// Git revision hash.
    pub revision: String,
    /// When the version was created; drives day separators.
    pub create_time: DateTime<Utc>,
    /// Commit author.
    pub author: String,
    /// Full commit message.
    pub message: String,
    /// Position in mainline history.
    pub order: CommitOrder,
    /// Set when another project's commit triggered this version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upstream_project: Option<UpstreamProject>,
}

impl CommitPayload {
    /// First seven characters of the revision, the way commit hashes are usually shown.
    pub fn short_revision(&self) -> &str {
        match self.revision.char_indices().nth(SHORT_REVISION_LEN) {
            Some((end, _)) => &self.revision[..end],
            None => &self.revision,
        }
    }

    /// Ticket keys (`PROJ-123`) mentioned in the commit message, in order of first appearance.
    pub fn ticket_references(&self) -> Vec<&str> {
        ticket_references(&self.message)
    }
}

const SHORT_REVISION_LEN: usize = 7;

/// The project whose commit triggered this version, for cross-project builds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamProject {
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Upstream revision that triggered the build.
    pub revision: String,
    /// Upstream project identifier.
    pub project: String,
    /// Identifier of the trigger (task or build).
    #[serde(rename = "triggerID", default)]
    pub trigger_id: String,
    /// Kind of trigger, e.g. `task`.
    #[serde(default)]
    pub trigger_type: String,
}

impl UpstreamProject {
    /// Display form of the link target: `owner/repo@revision`.
    pub fn link_target(&self) -> String {
        format!("{}/{}@{}", self.owner, self.repo, self.revision)
    }
}

/// A rolled-up run of commits. Never empty; order is fixed by the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NonEmptyCommits(Vec<CommitPayload>);

/// Returned when building a [`NonEmptyCommits`] from an empty sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("rolled-up commit group must contain at least one commit")]
pub struct EmptyCommitGroup;

impl NonEmptyCommits {
    /// Smart constructor: rejects an empty sequence.
    pub fn new(commits: Vec<CommitPayload>) -> Result<Self, EmptyCommitGroup> {
        if commits.is_empty() {
            Err(EmptyCommitGroup)
        } else {
            Ok(Self(commits))
        }
    }

    /// The representative commit of the group.
    pub fn first(&self) -> &CommitPayload {
        // Invariant upheld by the constructor.
        &self.0[0]
    }

    /// Number of commits in the group.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; provided for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The commits in source order.
    pub fn as_slice(&self) -> &[CommitPayload] {
        &self.0
    }

    /// Iterate the commits in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, CommitPayload> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a NonEmptyCommits {
    type Item = &'a CommitPayload;
    type IntoIter = std::slice::Iter<'a, CommitPayload>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

static TICKET_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z][A-Z0-9]*-[0-9]+\b").expect("ticket key regex"));

/// Extract ticket keys shaped like `PROJ-123` from free text.
///
/// The key part is an uppercase ASCII letter followed by uppercase letters or digits.
/// Matches must not be glued to surrounding word characters. Duplicates are dropped,
/// keeping the first appearance.
pub fn ticket_references(text: &str) -> Vec<&str> {
    let mut found: Vec<&str> = Vec::new();
    for key in TICKET_KEY.find_iter(text).map(|m| m.as_str()) {
        if !found.contains(&key) {
            found.push(key);
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commit(revision: &str, message: &str) -> CommitPayload {
        CommitPayload {
            id: VersionId::new("v1").expect("valid id"),
            revision: revision.to_string(),
            create_time: "2024-01-01T10:00:00Z".parse().expect("valid timestamp"),
            author: "Ada".to_string(),
            message: message.to_string(),
            order: CommitOrder::new(1),
            upstream_project: None,
        }
    }

    #[test]
    fn short_revision_truncates_to_seven_chars() {
        assert_eq!(commit("0123456789abcdef", "").short_revision(), "0123456");
    }

    #[test]
    fn short_revision_keeps_short_hashes() {
        assert_eq!(commit("abc", "").short_revision(), "abc");
    }

    #[test]
    fn ticket_references_finds_keys_in_order() {
        let refs = ticket_references("EVG-123: fix flaky test (see SERVER-9 and EVG-123)");
        assert_eq!(refs, vec!["EVG-123", "SERVER-9"]);
    }

    #[test]
    fn ticket_references_ignores_lowercase_and_glued_matches() {
        assert!(ticket_references("evg-12 xEVG-12 EVG-12a EVG- -12").is_empty());
    }

    #[test]
    fn ticket_references_accepts_digits_in_key() {
        assert_eq!(ticket_references("[DEVPROD2-77] bump"), vec!["DEVPROD2-77"]);
    }

    #[test]
    fn ticket_references_handles_non_ascii_text() {
        assert_eq!(ticket_references("été EVG-1 ✓"), vec!["EVG-1"]);
    }

    #[test]
    fn ticket_references_skips_chained_keys_and_keeps_trailing_punctuation_out() {
        assert_eq!(
            ticket_references("fix ABC-DEF-12, é-1 X-1."),
            vec!["DEF-12", "X-1"]
        );
    }

    #[test]
    fn non_empty_commits_rejects_empty_vec() {
        assert_eq!(NonEmptyCommits::new(Vec::new()), Err(EmptyCommitGroup));
    }

    #[test]
    fn non_empty_commits_first_is_head_of_sequence() {
        let group = NonEmptyCommits::new(vec![commit("aaa", "first"), commit("bbb", "second")])
            .expect("non-empty");
        assert_eq!(group.first().revision, "aaa");
        assert_eq!(group.len(), 2);
    }

    #[test]
    fn upstream_link_target_format() {
        let upstream = UpstreamProject {
            owner: "evergreen-ci".to_string(),
            repo: "evergreen".to_string(),
            revision: "deadbeef".to_string(),
            project: "evg".to_string(),
            trigger_id: "t1".to_string(),
            trigger_type: "task".to_string(),
        };
        assert_eq!(upstream.link_target(), "evergreen-ci/evergreen@deadbeef");
    }
}
