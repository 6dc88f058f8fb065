//! Fold-State Store - which folded groups are expanded.
//!
//! Keyed by row position only; it knows nothing about row content. Indices stay
//! valid as long as the row sequence they refer to only grows, so the store must
//! be cleared exactly when that sequence is reset.

use crate::view_state::types::RowIndex;
use std::collections::BTreeSet;

/// Expansion flags keyed by row index. Unknown indices are collapsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoldStateStore {
    expanded: BTreeSet<RowIndex>,
}

impl FoldStateStore {
    /// Empty store: every group collapsed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the fold flag for `index`.
    pub fn toggle(&mut self, index: RowIndex, expanded: bool) {
        if expanded {
            self.expanded.insert(index);
        } else {
            self.expanded.remove(&index);
        }
    }

    /// Whether `index` is expanded.
    pub fn is_expanded(&self, index: RowIndex) -> bool {
        self.expanded.contains(&index)
    }

    /// Expanded rows in ascending order.
    pub fn expanded_rows(&self) -> impl Iterator<Item = RowIndex> + '_ {
        self.expanded.iter().copied()
    }

    /// Number of expanded rows.
    pub fn expanded_count(&self) -> usize {
        self.expanded.len()
    }

    /// Forget every flag. Call together with resetting the row sequence.
    pub fn clear(&mut self) {
        self.expanded.clear();
    }
}
