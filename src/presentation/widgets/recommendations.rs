use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::{
    domain::{
        dataset::StrategicRecommendation,
        rich_text::{self, Segment},
    },
    presentation::widgets::{wrapped_height, ViewContext},
};

fn span(segment: Segment) -> Span<'static> {
    let mut style = Style::default();
    if segment.bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    if segment.italic {
        style = style.add_modifier(Modifier::ITALIC);
    }
    Span::styled(segment.text, style)
}

/// `title: text`, with the title bold and the text's markdown-lite
/// turned into styled spans.
pub fn recommendation_line(recommendation: &StrategicRecommendation) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("{}: ", recommendation.title),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    spans.extend(
        rich_text::parse(&recommendation.recommendation)
            .into_iter()
            .map(span),
    );
    Line::from(spans)
}

pub struct Recommendations<'a> {
    recommendations: &'a [StrategicRecommendation],
    ctx: ViewContext<'a>,
}

impl<'a> Recommendations<'a> {
    pub fn new(recommendations: &'a [StrategicRecommendation], ctx: ViewContext<'a>) -> Self {
        Self {
            recommendations,
            ctx,
        }
    }

    /// Rows needed at `width`, borders included.
    pub fn height(recommendations: &[StrategicRecommendation], width: u16) -> u16 {
        let inner = width.saturating_sub(2);
        wrapped_height(&body(recommendations), inner)
            .max(1)
            .saturating_add(2)
    }
}

fn body(recommendations: &[StrategicRecommendation]) -> Paragraph<'static> {
    let lines: Vec<Line> = recommendations.iter().map(recommendation_line).collect();
    Paragraph::new(lines).wrap(Wrap { trim: true })
}

impl Widget for Recommendations<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        body(self.recommendations)
            .block(self.ctx.panel("Strategic recommendations"))
            .render(area, buf);
    }
}
