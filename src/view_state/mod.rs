//! View-state layer - what the virtualization layer consumes
//!
//! Turns rows into render descriptors and keeps the per-row height bookkeeping
//! needed for scroll extent and offset lookup.
//!
//! # Module Structure
//!
//! - `types`: Core newtypes (RowIndex, RowHeight, LineOffset)
//! - `layout`: row height for a row and its fold flag
//! - `height_index`: RowHeightIndex - O(log n) prefix sums via Fenwick tree
//! - `actions`: RowAction, RowEventHandlers, HeightChange
//! - `present`: Row Renderer Dispatch - Row to RenderDescriptor

pub mod actions;
pub mod height_index;
pub mod layout;
pub mod present;
pub mod types;

pub use actions::{ClickOrigin, HeightChange, NoopHandlers, RowAction, RowEventHandlers};
pub use height_index::RowHeightIndex;
pub use layout::row_height;
pub use present::{
    present, CommitDescriptor, DateLabel, FoldedGroupDescriptor, PresentContext, RenderDescriptor,
};
pub use types::{LineOffset, RowHeight, RowIndex};
