//! Dashboard widgets
//!
//! Each widget takes a slice of the dataset plus a [`ViewContext`] and
//! draws itself into a ratatui buffer. Data shaping lives in `domain`.

pub mod breakdown_chart;
pub mod cartridge_chart;
pub mod cost_chart;
pub mod decision_matrix;
pub mod field_table;
pub mod kpi_card;
pub mod lcoe_chart;
pub mod navbar;
pub mod power_curve;
pub mod project_info;
pub mod recommendations;
pub mod reveal;
pub mod scalability_table;
pub mod spec_table;
pub mod status_bar;
pub mod tech_header;

use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Paragraph},
};

use crate::{domain::theme::PageTheme, presentation::config::Styles};

/// Row count as a layout height, saturating at `u16::MAX`.
pub fn rows(count: usize) -> u16 {
    u16::try_from(count).unwrap_or(u16::MAX)
}

/// Rows `paragraph` takes when rendered `width` columns wide. The
/// paragraph must be built without a block; callers add their borders.
pub fn wrapped_height(paragraph: &Paragraph, width: u16) -> u16 {
    rows(paragraph.line_count(width))
}

/// What every widget needs besides its own data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewContext<'a> {
    pub theme: PageTheme,
    pub styles: &'a Styles,
}

impl<'a> ViewContext<'a> {
    pub fn new(theme: PageTheme, styles: &'a Styles) -> Self {
        Self { theme, styles }
    }

    pub fn title(&self) -> Style {
        self.styles
            .get_or("title", Style::default().add_modifier(Modifier::BOLD))
    }

    pub fn muted(&self) -> Style {
        self.styles
            .get_or("muted", Style::default().fg(Color::DarkGray))
    }

    pub fn border(&self) -> Style {
        self.styles.get_or("border", Style::default().fg(Color::Gray))
    }

    pub fn warning(&self) -> Style {
        self.styles
            .get_or("warning", Style::default().fg(Color::Yellow))
    }

    pub fn highlight(&self) -> Style {
        self.styles.get_or(
            "highlight",
            Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED),
        )
    }

    /// Standard panel frame with a bold title.
    pub fn panel<'t>(&self, title: impl Into<String>) -> Block<'t> {
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.border())
            .title(Span::styled(format!(" {} ", title.into()), self.title()))
    }
}
