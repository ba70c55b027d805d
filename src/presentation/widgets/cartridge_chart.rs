use ratatui::{
    prelude::*,
    widgets::{Bar, BarChart, BarGroup},
};

use crate::{
    domain::{dataset::Cartridge, format},
    presentation::widgets::{rows, ViewContext},
};

/// Bars are drawn in tenths of a day.
const SCALE: f64 = 10.0;

/// Days of operation each fuel cartridge size lasts.
pub struct CartridgeChart<'a> {
    cartridges: &'a [Cartridge],
    progress: f64,
    ctx: ViewContext<'a>,
}

impl<'a> CartridgeChart<'a> {
    pub fn new(cartridges: &'a [Cartridge], ctx: ViewContext<'a>) -> Self {
        Self {
            cartridges,
            progress: 1.0,
            ctx,
        }
    }

    pub fn progress(mut self, progress: f64) -> Self {
        self.progress = progress;
        self
    }

    /// One row per cartridge with a blank row between bars, plus borders.
    pub fn height(cartridges: usize) -> u16 {
        rows(cartridges.max(1) * 2).saturating_add(1)
    }

    fn bar_values(&self) -> Vec<u64> {
        let progress = self.progress.clamp(0.0, 1.0);
        self.cartridges
            .iter()
            .map(|c| (c.autonomy_days.max(0.0) * SCALE * progress).round() as u64)
            .collect()
    }

    fn max_value(&self) -> u64 {
        let max = self
            .cartridges
            .iter()
            .map(|c| c.autonomy_days)
            .fold(0.0, f64::max);
        ((max * SCALE).round() as u64).max(1)
    }
}

impl Widget for CartridgeChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let accent = self.ctx.theme.accent;
        let bars: Vec<Bar> = self
            .cartridges
            .iter()
            .zip(self.bar_values())
            .map(|(cartridge, value)| {
                Bar::default()
                    .label(Line::from(cartridge.name.as_str()))
                    .value(value)
                    .text_value(format!("{} days", format::number(cartridge.autonomy_days)))
            })
            .collect();

        BarChart::default()
            .block(self.ctx.panel("Autonomy per cartridge"))
            .direction(Direction::Horizontal)
            .bar_width(1)
            .bar_gap(1)
            .bar_style(Style::default().fg(accent))
            .value_style(
                Style::default()
                    .fg(self.ctx.theme.on_accent)
                    .bg(accent)
                    .add_modifier(Modifier::BOLD),
            )
            .label_style(self.ctx.muted())
            .max(self.max_value())
            .data(BarGroup::default().bars(&bars))
            .render(area, buf);
    }
}
