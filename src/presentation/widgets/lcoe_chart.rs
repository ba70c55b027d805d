use ratatui::{
    prelude::*,
    widgets::{Bar, BarChart, BarGroup},
};

use crate::{
    domain::{
        chart::{bar_value, LcoeBar},
        format,
    },
    presentation::widgets::ViewContext,
};

/// $/kWh are drawn in cents so that bars have integer lengths.
const CENTS: f64 = 100.0;

/// Horizontal bars of LCOE, cheapest first.
pub struct LcoeChart<'a> {
    bars: Vec<LcoeBar<'a>>,
    progress: f64,
    ctx: ViewContext<'a>,
}

impl<'a> LcoeChart<'a> {
    pub fn new(bars: Vec<LcoeBar<'a>>, ctx: ViewContext<'a>) -> Self {
        Self {
            bars,
            progress: 1.0,
            ctx,
        }
    }

    pub fn progress(mut self, progress: f64) -> Self {
        self.progress = progress;
        self
    }
}

impl Widget for LcoeChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let max = self
            .bars
            .iter()
            .map(|b| bar_value(b.lcoe, CENTS, 1.0))
            .max()
            .unwrap_or(1)
            .max(1);
        let bars: Vec<Bar> = self
            .bars
            .iter()
            .map(|b| {
                Bar::default()
                    .label(Line::from(b.label.to_string()))
                    .value(bar_value(b.lcoe, CENTS, self.progress))
                    .text_value(format::currency_fixed2(b.lcoe))
                    .style(Style::default().fg(b.color))
                    .value_style(Style::default().fg(Color::White).bg(b.color))
            })
            .collect();

        BarChart::default()
            .block(self.ctx.panel("LCOE ($/kWh)"))
            .direction(Direction::Horizontal)
            .bar_width(1)
            .bar_gap(1)
            .max(max)
            .data(BarGroup::default().bars(&bars))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use rstest::*;

    use super::*;
    use crate::{
        domain::{
            chart::lcoe_ranking,
            dataset::{fixtures::dataset, Dataset},
            route::Route,
            theme::PageTheme,
        },
        presentation::{config::Styles, widgets::testing::render_lines},
    };

    #[rstest]
    fn test_bars_in_rank_order(dataset: Dataset) {
        let styles = Styles::default();
        let ctx = ViewContext::new(PageTheme::for_route(Route::Home, &dataset), &styles);
        let lines = render_lines(LcoeChart::new(lcoe_ranking(&dataset.alternatives), ctx), 40, 8);

        let row_of = |needle: &str| lines.iter().position(|l| l.contains(needle));
        let solar = row_of("Solar");
        let wind = row_of("Wind");
        let dmfc = row_of("DMFC");
        assert!(solar < wind && wind < dmfc, "{lines:#?}");
        assert!(lines.iter().any(|l| l.contains("$3.12")), "{lines:#?}");
    }

    #[rstest]
    fn test_hidden_bars_at_zero_progress(dataset: Dataset) {
        let styles = Styles::default();
        let ctx = ViewContext::new(PageTheme::for_route(Route::Home, &dataset), &styles);
        let chart = LcoeChart::new(lcoe_ranking(&dataset.alternatives), ctx).progress(0.0);
        let lines = render_lines(chart, 40, 8);
        assert!(!lines.iter().any(|l| l.contains('█')), "{lines:#?}");
    }
}
