use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{
    domain::dataset::Alternative,
    presentation::widgets::{wrapped_height, ViewContext},
};

/// Name, context tag and summary of one alternative.
pub struct TechHeader<'a> {
    alternative: &'a Alternative,
    ctx: ViewContext<'a>,
}

impl<'a> TechHeader<'a> {
    pub fn new(alternative: &'a Alternative, ctx: ViewContext<'a>) -> Self {
        Self { alternative, ctx }
    }

    /// Rows needed at `width`, including the bottom rule.
    pub fn height(alternative: &Alternative, width: u16) -> u16 {
        wrapped_height(&body(alternative, Style::default()), width).saturating_add(1)
    }
}

/// `tag` styles the context tag and its background colours the name.
/// Colours do not change the wrapping, so sizing passes a plain style.
fn body(alternative: &Alternative, tag: Style) -> Paragraph<'_> {
    let tag_style = tag.add_modifier(Modifier::BOLD);
    let name_style = Style::default()
        .fg(tag.bg.unwrap_or(Color::Reset))
        .add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(vec![
            Span::styled(alternative.name.as_str(), name_style),
            Span::raw("  "),
            Span::styled(format!(" {} ", alternative.context), tag_style),
        ]),
        Line::raw(alternative.details.summary.as_str()),
    ];
    Paragraph::new(lines).wrap(Wrap { trim: true })
}

impl Widget for TechHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let accent = self.ctx.theme.accent;
        let tag = Style::default().fg(self.ctx.theme.on_accent).bg(accent);
        body(self.alternative, tag)
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(accent)),
            )
            .render(area, buf);
    }
}
