//! Text rendering of the timeline.
//!
//! Each row renders to exactly `row_height` lines, so the row-height index can
//! drive scrolling: [`TimelineView`] only materializes the rows that intersect
//! the viewport.

use crate::state::HistoryTimeline;
use crate::view::styles::RowStyles;
use crate::view_state::{
    CommitDescriptor, FoldedGroupDescriptor, LineOffset, RenderDescriptor, RowIndex,
};
use chrono::TimeZone;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const DATE_FORMAT: &str = "%a %b %-d, %Y";
const SELECTED_MARKER: &str = "▶";
const COLLAPSED_MARKER: &str = "▸";
const EXPANDED_MARKER: &str = "▾";
const NESTED_INDENT: &str = "    ";

/// Lines for one row descriptor. `width == 0` disables truncation.
pub fn descriptor_lines<Tz: TimeZone>(
    descriptor: &RenderDescriptor<'_>,
    tz: &Tz,
    width: usize,
    styles: &RowStyles,
) -> Vec<Line<'static>> {
    match descriptor {
        RenderDescriptor::DateLabel(label) => {
            let text = format!("── {} ──", label.calendar_date(tz).format(DATE_FORMAT));
            vec![Line::styled(truncate_to_width(&text, width), styles.date_label)]
        }
        RenderDescriptor::Commit(commit) => {
            let marker = if commit.selected { SELECTED_MARKER } else { " " };
            let text = format!("{} {}", marker, commit_summary(commit));
            let style = if commit.selected {
                styles.selected_commit
            } else {
                styles.commit
            };
            vec![Line::styled(truncate_to_width(&text, width), style)]
        }
        RenderDescriptor::FoldedGroup(group) => folded_group_lines(group, width, styles),
    }
}

fn folded_group_lines(
    group: &FoldedGroupDescriptor<'_>,
    width: usize,
    styles: &RowStyles,
) -> Vec<Line<'static>> {
    let count = group.commits.len();
    let noun = if count == 1 { "commit" } else { "commits" };

    if group.is_expanded {
        let header = format!("{} {} inactive {}", EXPANDED_MARKER, count, noun);
        let mut lines = vec![Line::styled(
            truncate_to_width(&header, width),
            styles.folded_header,
        )];
        lines.extend(group.visible.iter().map(|commit| {
            let text = format!("{}{}", NESTED_INDENT, commit_summary(commit));
            Line::styled(truncate_to_width(&text, width), styles.folded_commit)
        }));
        return lines;
    }

    let mut header = format!("{} {} inactive {}", COLLAPSED_MARKER, count, noun);
    if !group.visible.is_empty() {
        let revisions: Vec<&str> = group.visible.iter().map(|c| c.revision).collect();
        header.push_str(": ");
        header.push_str(&revisions.join(", "));
    }
    if group.hidden > 0 {
        header.push_str(&format!(" +{} more", group.hidden));
    }
    vec![Line::styled(truncate_to_width(&header, width), styles.folded_header)]
}

fn commit_summary(commit: &CommitDescriptor<'_>) -> String {
    let subject = commit.message.lines().next().unwrap_or_default();
    let mut text = format!("{}  {}  {}", commit.revision, commit.author, subject);
    if let Some(link) = commit.upstream_link() {
        text.push_str("  ↑ ");
        text.push_str(&link);
    }
    text
}

/// Truncate `text` to `width` display columns, ending with `…` when cut.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if width == 0 || text.width() <= width {
        return text.to_string();
    }

    let budget = width.saturating_sub(1);
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// Concatenated span contents of a line.
pub fn line_to_plain(line: &Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}

/// Every row of the timeline rendered as lines.
pub fn timeline_lines<Tz: TimeZone>(
    timeline: &HistoryTimeline<Tz>,
    column_limit: usize,
    width: usize,
    styles: &RowStyles,
) -> Vec<Line<'static>> {
    (0..timeline.len())
        .filter_map(|i| timeline.present(RowIndex::new(i), column_limit))
        .flat_map(|descriptor| descriptor_lines(&descriptor, timeline.timezone(), width, styles))
        .collect()
}

/// The whole timeline as plain text, one line per rendered line.
pub fn timeline_text<Tz: TimeZone>(
    timeline: &HistoryTimeline<Tz>,
    column_limit: usize,
    width: usize,
) -> String {
    timeline_lines(timeline, column_limit, width, &RowStyles::plain())
        .iter()
        .map(line_to_plain)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Virtualized view of a timeline scrolled to `scroll`.
pub struct TimelineView<'a, Tz: TimeZone> {
    timeline: &'a HistoryTimeline<Tz>,
    column_limit: usize,
    scroll: LineOffset,
    styles: RowStyles,
}

impl<'a, Tz: TimeZone> TimelineView<'a, Tz> {
    /// View of `timeline` scrolled to the top.
    pub fn new(timeline: &'a HistoryTimeline<Tz>, column_limit: usize) -> Self {
        Self {
            timeline,
            column_limit,
            scroll: LineOffset::default(),
            styles: RowStyles::default(),
        }
    }

    /// Scroll to an absolute line offset.
    pub fn scroll(mut self, scroll: LineOffset) -> Self {
        self.scroll = scroll;
        self
    }

    /// Override the row styles.
    pub fn styles(mut self, styles: RowStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Lines visible in a viewport of `height` lines and `width` columns.
    pub fn visible_lines(&self, width: usize, height: usize) -> Vec<Line<'static>> {
        let heights = self.timeline.heights();
        let Some(first) = heights.row_at_offset(self.scroll) else {
            return Vec::new();
        };
        let row_start = heights.offset_of(first).map_or(0, |o| o.get());
        let mut skip = self.scroll.get() - row_start;

        let mut lines = Vec::with_capacity(height);
        let mut index = first;
        while lines.len() < height {
            let Some(descriptor) = self.timeline.present(index, self.column_limit) else {
                break;
            };
            let row_lines =
                descriptor_lines(&descriptor, self.timeline.timezone(), width, &self.styles);
            lines.extend(row_lines.into_iter().skip(skip));
            skip = 0;
            index = index.next();
        }
        lines.truncate(height);
        lines
    }
}

impl<Tz: TimeZone> Widget for TimelineView<'_, Tz> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.visible_lines(area.width as usize, area.height as usize);
        Paragraph::new(lines).render(area, buf);
    }
}

#[cfg(test)]
#[path = "timeline_view_tests.rs"]
mod tests;
