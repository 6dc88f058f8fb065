//! Row styling.

use ratatui::style::{Color, Modifier, Style};

/// Styles for each kind of rendered line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowStyles {
    /// Day separator line.
    pub date_label: Style,
    /// Unselected commit line.
    pub commit: Style,
    /// The selected commit's line.
    pub selected_commit: Style,
    /// First line of a folded group.
    pub folded_header: Style,
    /// Commit lines inside an expanded group.
    pub folded_commit: Style,
}

impl RowStyles {
    /// Styles with no colors or modifiers, for plain output and `NO_COLOR`.
    pub fn plain() -> Self {
        Self {
            date_label: Style::default(),
            commit: Style::default(),
            selected_commit: Style::default(),
            folded_header: Style::default(),
            folded_commit: Style::default(),
        }
    }

    /// Plain styles when `NO_COLOR` is set, default colors otherwise.
    pub fn from_env() -> Self {
        if std::env::var_os("NO_COLOR").is_some() {
            Self::plain()
        } else {
            Self::default()
        }
    }
}

impl Default for RowStyles {
    fn default() -> Self {
        Self {
            date_label: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
            commit: Style::default(),
            selected_commit: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            folded_header: Style::default().fg(Color::Yellow),
            folded_commit: Style::default().fg(Color::Gray),
        }
    }
}
