use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{Axis, Chart, Dataset as ChartDataset, GraphType, Paragraph},
};

use crate::{
    domain::{dataset::CurvePoint, format},
    presentation::widgets::ViewContext,
};

const CAPTION: &str = "P ∝ v³";

/// Turbine output against wind speed, with the named operating points
/// listed under the plot.
pub struct PowerCurve<'a> {
    points: &'a [CurvePoint],
    progress: f64,
    ctx: ViewContext<'a>,
}

impl<'a> PowerCurve<'a> {
    pub fn new(points: &'a [CurvePoint], ctx: ViewContext<'a>) -> Self {
        Self {
            points,
            progress: 1.0,
            ctx,
        }
    }

    pub fn progress(mut self, progress: f64) -> Self {
        self.progress = progress;
        self
    }

    /// Axis upper bounds, rounded up to a whole step so the labels stay
    /// round numbers.
    pub fn bounds(points: &[CurvePoint]) -> (f64, f64) {
        let max_speed = points.iter().map(|p| p.wind_speed).fold(0.0, f64::max);
        let max_power = points.iter().map(|p| p.power).fold(0.0, f64::max);
        (round_up(max_speed, 5.0), round_up(max_power, 100.0))
    }

    /// Data points, with power scaled by the reveal progress.
    fn series(&self) -> Vec<(f64, f64)> {
        let progress = self.progress.clamp(0.0, 1.0);
        self.points
            .iter()
            .map(|p| (p.wind_speed, p.power * progress))
            .collect()
    }

    /// `Marginal 4.5 m/s · Average 8 m/s`, skipping unnamed points.
    pub fn point_labels(points: &[CurvePoint]) -> Option<String> {
        let labels: Vec<String> = points
            .iter()
            .filter(|p| !p.label.is_empty())
            .map(|p| format!("{} {} m/s", p.label, format::number(p.wind_speed)))
            .collect();
        (!labels.is_empty()).then(|| labels.join(" · "))
    }
}

fn round_up(value: f64, step: f64) -> f64 {
    ((value / step).ceil() * step).max(step)
}

impl Widget for PowerCurve<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (max_x, max_y) = Self::bounds(self.points);
        let series = self.series();
        let accent = self.ctx.theme.accent;
        let datasets = vec![
            ChartDataset::default()
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(accent))
                .data(&series),
            ChartDataset::default()
                .marker(Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
                .data(&series),
        ];

        let muted = self.ctx.muted();
        let x_labels = [0.0, max_x / 2.0, max_x].map(|v| Span::styled(format::number(v), muted));
        let y_labels = [0.0, max_y / 2.0, max_y].map(|v| Span::styled(format::number(v), muted));

        let block = self
            .ctx
            .panel("Power curve")
            .title_bottom(Line::styled(format!(" {CAPTION} "), muted).right_aligned());
        let inner = block.inner(area);
        block.render(area, buf);

        let labels = Self::point_labels(self.points);
        let label_rows = u16::from(labels.is_some());
        let [plot_area, label_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(label_rows)]).areas(inner);

        Chart::new(datasets)
            .x_axis(
                Axis::default()
                    .title(Span::styled("m/s", muted))
                    .bounds([0.0, max_x])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .title(Span::styled("W", muted))
                    .bounds([0.0, max_y])
                    .labels(y_labels),
            )
            .render(plot_area, buf);

        if let Some(labels) = labels {
            Paragraph::new(labels)
                .style(Style::default().fg(accent))
                .centered()
                .render(label_area, buf);
        }
    }
}
