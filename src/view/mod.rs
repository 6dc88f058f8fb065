//! Rendering of render descriptors into ratatui lines.
//!
//! - `styles`: RowStyles - per-line-kind styling
//! - `timeline_view`: descriptor lines, plain-text output and the virtualized `TimelineView` widget

pub mod styles;
pub mod timeline_view;

pub use styles::RowStyles;
pub use timeline_view::{
    descriptor_lines, line_to_plain, timeline_lines, timeline_text, truncate_to_width,
    TimelineView,
};
