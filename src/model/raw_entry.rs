//! One element of a history page, exactly as the source delivers it.

use crate::model::CommitPayload;
use serde::{Deserialize, Serialize};

/// A page element: either a single commit or a pre-aggregated group of rolled-up commits.
///
/// Both fields are optional on the wire. Exactly one must be present; that rule is
/// enforced by [`crate::timeline::classify`], not by deserialization, so a bad record
/// can be reported and skipped without losing the rest of its page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEntry {
    /// A single mainline commit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<CommitPayload>,
    /// A run of inactive commits rolled up by the source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rolled_up_versions: Option<Vec<CommitPayload>>,
}

impl RawEntry {
    /// Entry holding a single commit.
    pub fn commit(version: CommitPayload) -> Self {
        Self {
            version: Some(version),
            rolled_up_versions: None,
        }
    }

    /// Entry holding a rolled-up group.
    pub fn rolled_up(versions: Vec<CommitPayload>) -> Self {
        Self {
            version: None,
            rolled_up_versions: Some(versions),
        }
    }
}
