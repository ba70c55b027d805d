use ratatui::{
    prelude::*,
    widgets::{BorderType, Paragraph, Wrap},
};

use crate::{
    domain::{dataset::KpiFigure, format},
    presentation::widgets::ViewContext,
};

/// A headline number with a title and an optional caption.
///
/// The highlighted variant gets a thick border in the page accent.
#[derive(Debug, Clone, PartialEq)]
pub struct KpiCard<'a> {
    title: String,
    value: String,
    caption: Option<String>,
    highlight: bool,
    ctx: ViewContext<'a>,
}

impl<'a> KpiCard<'a> {
    pub fn new(title: impl Into<String>, value: impl Into<String>, ctx: ViewContext<'a>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            caption: None,
            highlight: false,
            ctx,
        }
    }

    /// A home-page LCOE card: `0.31 $/kWh`, tagged with its system.
    pub fn lcoe(title: impl Into<String>, figure: &KpiFigure, ctx: ViewContext<'a>) -> Self {
        Self::new(
            title,
            format!("{} {}", format::number(figure.value), figure.unit),
            ctx,
        )
        .caption(figure.system.clone())
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        let caption = caption.into();
        self.caption = (!caption.is_empty()).then_some(caption);
        self
    }

    pub fn highlight(mut self, highlight: bool) -> Self {
        self.highlight = highlight;
        self
    }
}

impl Widget for KpiCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = self.ctx.panel(self.title.clone());
        if self.highlight {
            block = block
                .border_type(BorderType::Thick)
                .border_style(Style::default().fg(self.ctx.theme.accent));
        }

        let value_style = if self.highlight {
            Style::default()
                .fg(self.ctx.theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        let mut lines = vec![Line::styled(self.value, value_style)];
        if let Some(caption) = self.caption {
            lines.push(Line::styled(caption, self.ctx.muted()));
        }

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

/// The primary recommendation, shown beside the project card.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationBanner<'a> {
    recommendation: &'a str,
    ctx: ViewContext<'a>,
}

impl<'a> RecommendationBanner<'a> {
    pub fn new(recommendation: &'a str, ctx: ViewContext<'a>) -> Self {
        Self {
            recommendation,
            ctx,
        }
    }
}

impl Widget for RecommendationBanner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self
            .ctx
            .panel("Primary recommendation")
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(self.ctx.theme.accent));
        Paragraph::new(Line::from(vec![
            Span::styled("✔ ", Style::default().fg(Color::Green)),
            Span::styled(
                self.recommendation,
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]))
        .block(block)
        .wrap(Wrap { trim: true })
        .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;
    use crate::{
        domain::{
            dataset::{fixtures::dataset, Dataset},
            route::Route,
            theme::PageTheme,
        },
        infrastructure::tui::test::buffer_lines,
        presentation::{config::Styles, widgets::testing::render},
    };

    #[rstest]
    fn test_lcoe_card(dataset: Dataset) {
        let styles = Styles::default();
        let ctx = ViewContext::new(PageTheme::for_route(Route::Home, &dataset), &styles);
        let card = KpiCard::lcoe("Most cost-effective", &dataset.kpis.most_cost_effective_lcoe, ctx)
            .highlight(true);
        let buf = render(card, 26, 4);
        let lines = buffer_lines(&buf);
        assert!(lines[0].contains("Most cost-effective"));
        assert!(lines[1].contains("0.31 $/kWh"));
        assert!(lines[2].contains("Solar PV"));
        assert_eq!(buf[(0, 0)].symbol(), "┏");
    }

    #[rstest]
    fn test_plain_card_has_rounded_border(dataset: Dataset) {
        let styles = Styles::default();
        let ctx = ViewContext::new(PageTheme::for_route(Route::Home, &dataset), &styles);
        let buf = render(KpiCard::new("OPEX", "$80", ctx), 12, 3);
        assert_eq!(buf[(0, 0)].symbol(), "╭");
        assert!(buffer_lines(&buf)[1].contains("$80"));
    }

    #[rstest]
    fn test_empty_caption_is_dropped(dataset: Dataset) {
        let styles = Styles::default();
        let ctx = ViewContext::new(PageTheme::for_route(Route::Home, &dataset), &styles);
        let card = KpiCard::new("TCO", "$6,524", ctx).caption("");
        assert_eq!(card.caption, None);
    }

    #[rstest]
    fn test_banner(dataset: Dataset) {
        let styles = Styles::default();
        let ctx = ViewContext::new(PageTheme::for_route(Route::Home, &dataset), &styles);
        let buf = render(
            RecommendationBanner::new(&dataset.kpis.primary_recommendation, ctx),
            60,
            3,
        );
        assert!(buffer_lines(&buf)[1].contains("Photovoltaic Solar with LiFePO4 storage"));
    }
}
