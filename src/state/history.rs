//! HistoryTimeline - one history context and its single writer.
//!
//! Owns the row sequence, the fold-state store and the row-height index for a
//! single history view, so that every mutation goes through one `&mut self`
//! call and readers never observe a half-applied page or toggle. Two history
//! views are two `HistoryTimeline` values and cannot share fold flags.
//!
//! For use across threads, wrap the whole value in a `Mutex` or `RwLock`.

use crate::model::{CommitOrder, FoldError, RawEntry, TimelineError};
use crate::state::FoldStateStore;
use crate::timeline::{Row, TimelineBuilder};
use crate::view_state::{
    present, row_height, HeightChange, PresentContext, RenderDescriptor, RowAction,
    RowEventHandlers, RowHeightIndex, RowIndex,
};
use chrono::{Local, TimeZone};
use tracing::{debug, info, warn};

/// Outcome of feeding one page into the timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageReport {
    /// Index of the first row appended by this page (equal to the old length).
    pub first_new_row: RowIndex,
    /// Number of rows appended, separators included.
    pub appended: usize,
    /// Entries skipped from this page.
    pub skipped: Vec<TimelineError>,
}

/// Rows, fold state and heights for one history context.
#[derive(Debug, Clone)]
pub struct HistoryTimeline<Tz: TimeZone = Local> {
    builder: TimelineBuilder<Tz>,
    rows: Vec<Row>,
    folds: FoldStateStore,
    heights: RowHeightIndex,
    selected: Option<CommitOrder>,
    skipped_total: usize,
}

impl HistoryTimeline<Local> {
    /// Timeline on the host's local calendar.
    pub fn local(selected: Option<CommitOrder>) -> Self {
        Self::new(TimelineBuilder::local(), selected)
    }
}

impl<Tz: TimeZone> HistoryTimeline<Tz> {
    /// Empty timeline; `selected` marks the commit to highlight.
    pub fn new(builder: TimelineBuilder<Tz>, selected: Option<CommitOrder>) -> Self {
        Self {
            builder,
            rows: Vec::new(),
            folds: FoldStateStore::new(),
            heights: RowHeightIndex::default(),
            selected,
            skipped_total: 0,
        }
    }

    /// Append the rows for one resolved page.
    ///
    /// Callers must not feed the same page twice; no dedup pass is made.
    pub fn apply_page<I>(&mut self, entries: I) -> PageReport
    where
        I: IntoIterator<Item = RawEntry>,
    {
        let first_new_row = RowIndex::new(self.rows.len());
        let rows = std::mem::take(&mut self.rows);
        let extension = self.builder.extend(rows, entries, self.selected);
        self.rows = extension.rows;

        for (i, row) in self.rows.iter().enumerate().skip(first_new_row.get()) {
            let expanded = self.folds.is_expanded(RowIndex::new(i));
            self.heights.push(row_height(row, expanded));
        }

        let appended = self.rows.len() - first_new_row.get();
        if !extension.skipped.is_empty() {
            warn!(
                skipped = extension.skipped.len(),
                appended, "Page contained entries that could not be shown"
            );
        }
        self.skipped_total += extension.skipped.len();

        PageReport {
            first_new_row,
            appended,
            skipped: extension.skipped,
        }
    }

    /// Discard the history context: rows, fold flags and heights together.
    ///
    /// Called when the caller's query changes (different project or filters).
    pub fn reset(&mut self, selected: Option<CommitOrder>) {
        info!(
            rows = self.rows.len(),
            expanded = self.folds.expanded_count(),
            "Resetting history timeline"
        );
        self.rows.clear();
        self.folds.clear();
        self.heights.clear();
        self.selected = selected;
        self.skipped_total = 0;
    }

    /// Set the fold flag of the folded group at `index` and update its height.
    ///
    /// Both changes happen in this one call; the returned [`HeightChange`] is the
    /// signal the virtualization layer must use to re-measure.
    ///
    /// # Errors
    ///
    /// [`FoldError::OutOfBounds`] if there is no such row, [`FoldError::NotFoldable`]
    /// if the row is not a folded group. Nothing is changed in either case.
    pub fn toggle_fold(&mut self, index: RowIndex, expanded: bool) -> Result<HeightChange, FoldError> {
        let row = self.rows.get(index.get()).ok_or(FoldError::OutOfBounds {
            index: index.get(),
            len: self.rows.len(),
        })?;
        if !matches!(row, Row::FoldedGroup { .. }) {
            return Err(FoldError::NotFoldable { index: index.get() });
        }

        let current = row_height(row, expanded);
        self.folds.toggle(index, expanded);
        let previous = self.heights.set(index, current).unwrap_or(current);

        debug!(%index, expanded, from = previous.get(), to = current.get(), "Toggled folded group");
        Ok(HeightChange {
            index,
            previous,
            current,
        })
    }

    /// Set every folded group to `expanded`, returning the heights that changed.
    pub fn set_all_folds(&mut self, expanded: bool) -> Vec<HeightChange> {
        let targets: Vec<RowIndex> = self
            .rows
            .iter()
            .enumerate()
            .filter(|(i, row)| {
                matches!(row, Row::FoldedGroup { .. })
                    && self.folds.is_expanded(RowIndex::new(*i)) != expanded
            })
            .map(|(i, _)| RowIndex::new(i))
            .collect();

        targets
            .into_iter()
            .filter_map(|index| self.toggle_fold(index, expanded).ok())
            .collect()
    }

    /// Forward a row action to `handlers`.
    ///
    /// Clicks are passed through verbatim. A fold toggle is applied first, then
    /// reported through `on_toggle_fold` and `on_row_height_changed`.
    pub fn dispatch<H>(&mut self, action: &RowAction, handlers: &mut H) -> Result<(), FoldError>
    where
        H: RowEventHandlers + ?Sized,
    {
        match action {
            RowAction::OpenCommit {
                origin, version_id, ..
            } => handlers.on_open_commit(*origin, version_id),
            RowAction::OpenUpstreamProject {
                origin, upstream, ..
            } => handlers.on_open_upstream_project(*origin, upstream),
            RowAction::OpenTicket { origin, ticket, .. } => handlers.on_open_ticket(*origin, ticket),
            RowAction::ToggleFold { index, expanded } => {
                let change = self.toggle_fold(*index, *expanded)?;
                handlers.on_toggle_fold(*index, *expanded);
                handlers.on_row_height_changed(change);
            }
        }
        Ok(())
    }

    /// Render descriptor for the row at `index`, using its current fold flag.
    pub fn present(&self, index: RowIndex, column_limit: usize) -> Option<RenderDescriptor<'_>> {
        let row = self.rows.get(index.get())?;
        let ctx = PresentContext {
            index,
            is_expanded: self.folds.is_expanded(index),
            column_limit,
        };
        Some(present(row, &ctx))
    }

    /// All rows, oldest page first.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Row at `index`.
    pub fn row(&self, index: RowIndex) -> Option<&Row> {
        self.rows.get(index.get())
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True before the first non-empty page.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Current fold flags.
    pub fn fold_state(&self) -> &FoldStateStore {
        &self.folds
    }

    /// Whether the group at `index` is expanded.
    pub fn is_expanded(&self, index: RowIndex) -> bool {
        self.folds.is_expanded(index)
    }

    /// Row heights, kept in step with the fold flags.
    pub fn heights(&self) -> &RowHeightIndex {
        &self.heights
    }

    /// Order of the highlighted commit.
    pub fn selected_order(&self) -> Option<CommitOrder> {
        self.selected
    }

    /// Entries skipped since the last reset.
    pub fn skipped_total(&self) -> usize {
        self.skipped_total
    }

    /// Calendar used for day separators.
    pub fn timezone(&self) -> &Tz {
        self.builder.timezone()
    }
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;
