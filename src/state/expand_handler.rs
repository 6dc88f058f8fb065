//! Folded-group expand/collapse commands.
//!
//! Thin routing from user-level fold commands to [`HistoryTimeline`], reporting
//! every applied toggle to the host handlers exactly like a clicked toggle.

use crate::model::FoldError;
use crate::state::HistoryTimeline;
use crate::view_state::{RowAction, RowEventHandlers, RowIndex};
use chrono::TimeZone;

/// A fold command issued by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoldCommand {
    /// Flip the fold flag of one folded group.
    Toggle(RowIndex),
    /// Expand every folded group.
    ExpandAll,
    /// Collapse every folded group.
    CollapseAll,
}

/// Apply `command` to `timeline`.
///
/// Returns the number of rows whose fold flag changed.
///
/// # Errors
///
/// Only `Toggle` can fail, when its row is missing or not a folded group.
pub fn handle_fold_command<Tz, H>(
    timeline: &mut HistoryTimeline<Tz>,
    command: FoldCommand,
    handlers: &mut H,
) -> Result<usize, FoldError>
where
    Tz: TimeZone,
    H: RowEventHandlers + ?Sized,
{
    match command {
        FoldCommand::Toggle(index) => {
            let action = RowAction::ToggleFold {
                index,
                expanded: !timeline.is_expanded(index),
            };
            timeline.dispatch(&action, handlers)?;
            Ok(1)
        }
        FoldCommand::ExpandAll | FoldCommand::CollapseAll => {
            let expanded = command == FoldCommand::ExpandAll;
            let changes = timeline.set_all_folds(expanded);
            for change in &changes {
                handlers.on_toggle_fold(change.index, expanded);
                handlers.on_row_height_changed(*change);
            }
            Ok(changes.len())
        }
    }
}

// ===== Tests =====
