//! Row actions and the handler seam they are forwarded through.
//!
//! A [`RowAction`] is a click handler already bound to its payload: the
//! descriptor producing it decides *what* the click refers to, the host decides
//! *what happens*. Actions own their data so they can be dispatched against a
//! mutable timeline after the descriptor that produced them is gone.

use crate::model::{UpstreamProject, VersionId};
use crate::view_state::types::{RowHeight, RowIndex};

/// Where a click originated.
///
/// Commits nested inside a folded group report `FoldedGroup` so hosts can route
/// them to a separate handler set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClickOrigin {
    /// A top-level commit row.
    Row,
    /// A commit shown inside a folded group.
    FoldedGroup,
}

/// A user interaction bound to the row it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    /// Open the version page of a commit (its revision was clicked).
    OpenCommit {
        /// Row the click landed on.
        index: RowIndex,
        /// Plain row or folded group.
        origin: ClickOrigin,
        /// Version to open.
        version_id: VersionId,
    },
    /// Open the upstream project that triggered a commit.
    OpenUpstreamProject {
        /// Row the click landed on.
        index: RowIndex,
        /// Plain row or folded group.
        origin: ClickOrigin,
        /// Project to open.
        upstream: UpstreamProject,
    },
    /// Open a ticket referenced by a commit message.
    OpenTicket {
        /// Row the click landed on.
        index: RowIndex,
        /// Plain row or folded group.
        origin: ClickOrigin,
        /// Ticket key, e.g. `PROJ-123`.
        ticket: String,
    },
    /// Set the folded group at `index` to `expanded`.
    ToggleFold {
        /// Row of the folded group.
        index: RowIndex,
        /// Fold flag to apply.
        expanded: bool,
    },
}

impl RowAction {
    /// Row the action belongs to.
    pub fn index(&self) -> RowIndex {
        match self {
            RowAction::OpenCommit { index, .. }
            | RowAction::OpenUpstreamProject { index, .. }
            | RowAction::OpenTicket { index, .. }
            | RowAction::ToggleFold { index, .. } => *index,
        }
    }
}

/// Height-invalidation signal for the virtualization layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeightChange {
    /// Row whose height changed.
    pub index: RowIndex,
    /// Height before the toggle.
    pub previous: RowHeight,
    /// Height after the toggle.
    pub current: RowHeight,
}

impl HeightChange {
    /// Signed change in lines.
    pub fn delta(&self) -> isize {
        self.current.get() as isize - self.previous.get() as isize
    }
}

/// Callbacks supplied by the host UI. Every method defaults to a no-op.
pub trait RowEventHandlers {
    /// A commit revision was clicked.
    fn on_open_commit(&mut self, _origin: ClickOrigin, _version_id: &VersionId) {}

    /// An upstream project link was clicked.
    fn on_open_upstream_project(&mut self, _origin: ClickOrigin, _upstream: &UpstreamProject) {}

    /// A ticket reference was clicked.
    fn on_open_ticket(&mut self, _origin: ClickOrigin, _ticket: &str) {}

    /// Called after a fold toggle has been applied.
    fn on_toggle_fold(&mut self, _index: RowIndex, _expanded: bool) {}

    /// Called after a fold toggle, with the height the virtualization layer must re-measure.
    fn on_row_height_changed(&mut self, _change: HeightChange) {}
}

/// Handler set that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHandlers;

impl RowEventHandlers for NoopHandlers {}
