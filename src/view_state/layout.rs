//! Row heights as seen by the virtualization layer.

use crate::timeline::Row;
use crate::view_state::types::RowHeight;

/// Rendered height of `row` given its fold state.
///
/// Separators and commits take one line. A folded group takes one header line,
/// plus one line per commit while expanded.
pub fn row_height(row: &Row, expanded: bool) -> RowHeight {
    match row {
        Row::DateSeparator { .. } | Row::Commit { .. } => RowHeight::ONE,
        Row::FoldedGroup { commits, .. } if expanded => RowHeight::saturating_from(1 + commits.len()),
        Row::FoldedGroup { .. } => RowHeight::ONE,
    }
}
