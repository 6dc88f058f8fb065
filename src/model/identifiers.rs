//! Core identifier newtypes with smart constructors.
//!
//! String identifiers validate non-empty input at construction time.
//! Raw constructors are never exported - use smart constructors only.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a version (one commit's build) as assigned by the upstream source.
/// NEVER export the constructor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VersionId(String);

impl VersionId {
    /// Smart constructor: validates non-empty version ID
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidVersionId> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(InvalidVersionId::Empty);
        }
        Ok(Self(raw))
    }

    /// The raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VersionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for VersionId {
    type Error = InvalidVersionId;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<VersionId> for String {
    fn from(id: VersionId) -> Self {
        id.0
    }
}

/// Position of a commit in the project's mainline history.
///
/// Used as the "selected order" that identifies the single highlighted commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommitOrder(i64);

impl CommitOrder {
    /// Wrap a raw order number.
    pub fn new(order: i64) -> Self {
        Self(order)
    }

    /// The raw order number.
    pub fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for CommitOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for CommitOrder {
    fn from(order: i64) -> Self {
        Self(order)
    }
}

// ===== Error Types =====

/// Rejected version identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidVersionId {
    /// The identifier was an empty string.
    #[error("Version ID cannot be empty")]
    Empty,
}

// ===== Tests =====
