use ratatui::{
    prelude::*,
    widgets::{Bar, BarChart, BarGroup, Paragraph},
};

use crate::{
    domain::{
        chart::{bar_value, full_name_for, CostGroup, CAPEX_COLOR, OPEX_COLOR},
        format,
    },
    presentation::widgets::{rows, ViewContext},
};

const GROUP_GAP: u16 = 3;
const BAR_GAP: u16 = 1;
const MAX_BAR_WIDTH: u16 = 9;

/// CAPEX and annual OPEX side by side for every alternative.
///
/// Below the bars a detail line names the highlighted group in full,
/// since the axis only has room for the short label.
pub struct CostChart<'a> {
    groups: Vec<CostGroup<'a>>,
    selected: usize,
    progress: f64,
    ctx: ViewContext<'a>,
}

impl<'a> CostChart<'a> {
    pub fn new(groups: Vec<CostGroup<'a>>, ctx: ViewContext<'a>) -> Self {
        Self {
            groups,
            selected: 0,
            progress: 1.0,
            ctx,
        }
    }

    pub fn selected(mut self, selected: usize) -> Self {
        self.selected = selected;
        self
    }

    pub fn progress(mut self, progress: f64) -> Self {
        self.progress = progress;
        self
    }

    /// The detail line for the highlighted group, if there is one.
    pub fn detail(&self) -> Option<String> {
        let group = self.groups.get(self.selected)?;
        Some(format!(
            "▶ {}  CAPEX {}  OPEX {}/yr",
            full_name_for(&self.groups, group.label),
            format::currency(group.capex),
            format::currency(group.opex_annual)
        ))
    }

    fn bar_width(&self, inner_width: u16) -> u16 {
        let groups = rows(self.groups.len().max(1));
        let per_bar = inner_width.saturating_sub(groups * GROUP_GAP) / (groups * 2);
        per_bar.saturating_sub(BAR_GAP).clamp(1, MAX_BAR_WIDTH)
    }

    fn bar(&self, value: f64, color: Color) -> Bar<'static> {
        Bar::default()
            .value(bar_value(value, 1.0, self.progress))
            .text_value(format::compact(value))
            .style(Style::default().fg(color))
            .value_style(Style::default().fg(Color::White).bg(color))
    }
}

impl Widget for CostChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.ctx.panel("CAPEX vs OPEX (USD)");
        let inner = block.inner(area);
        block.render(area, buf);

        let [chart_area, legend_area, detail_area] = Layout::vertical([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        let max = self
            .groups
            .iter()
            .map(|g| bar_value(g.capex.max(g.opex_annual), 1.0, 1.0))
            .max()
            .unwrap_or(1)
            .max(1);
        let mut chart = BarChart::default()
            .bar_width(self.bar_width(chart_area.width))
            .bar_gap(BAR_GAP)
            .group_gap(GROUP_GAP)
            .max(max);
        for (i, group) in self.groups.iter().enumerate() {
            let label_style = if i == self.selected {
                self.ctx.highlight()
            } else {
                Style::default()
            };
            let bars = [
                self.bar(group.capex, CAPEX_COLOR),
                self.bar(group.opex_annual, OPEX_COLOR),
            ];
            chart = chart.data(
                BarGroup::default()
                    .label(Line::styled(group.label.to_string(), label_style))
                    .bars(&bars),
            );
        }
        chart.render(chart_area, buf);

        Paragraph::new(Line::from(vec![
            Span::styled("■ ", Style::default().fg(CAPEX_COLOR)),
            Span::raw("CAPEX  "),
            Span::styled("■ ", Style::default().fg(OPEX_COLOR)),
            Span::raw("OPEX per year"),
        ]))
        .render(legend_area, buf);

        if let Some(detail) = self.detail() {
            Paragraph::new(Span::styled(
                detail,
                Style::default()
                    .fg(self.ctx.theme.accent)
                    .add_modifier(Modifier::BOLD),
            ))
            .render(detail_area, buf);
        }
    }
}
