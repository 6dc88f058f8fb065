//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod commit;
pub mod error;
pub mod identifiers;
pub mod raw_entry;

// Re-export for convenience
pub use commit::{
    ticket_references, CommitPayload, EmptyCommitGroup, NonEmptyCommits, UpstreamProject,
};
pub use error::{AppError, EntryShape, FoldError, InputError, ParseError, TimelineError};
pub use identifiers::{CommitOrder, InvalidVersionId, VersionId};
pub use raw_entry::RawEntry;
