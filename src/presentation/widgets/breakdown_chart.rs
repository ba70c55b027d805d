use ratatui::{prelude::*, widgets::Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::{
    domain::{chart, dataset::CostItem, format},
    presentation::widgets::{rows, ViewContext},
};

const MAX_NAME_WIDTH: usize = 22;
const VALUE_WIDTH: usize = 9;
const SHARE_WIDTH: usize = 4;

/// Horizontal bars of a cost breakdown, largest item filling the row,
/// followed by a total line.
pub struct BreakdownChart<'a> {
    title: String,
    items: &'a [CostItem],
    color: Color,
    progress: f64,
    ctx: ViewContext<'a>,
}

impl<'a> BreakdownChart<'a> {
    pub fn new(title: impl Into<String>, items: &'a [CostItem], ctx: ViewContext<'a>) -> Self {
        Self {
            title: title.into(),
            items,
            color: ctx.theme.accent,
            progress: 1.0,
            ctx,
        }
    }

    pub fn progress(mut self, progress: f64) -> Self {
        self.progress = progress;
        self
    }

    pub fn height(items: usize) -> u16 {
        rows(items).saturating_add(3)
    }

    fn name_width(&self) -> usize {
        self.items
            .iter()
            .map(|item| item.name.width())
            .max()
            .unwrap_or(0)
            .min(MAX_NAME_WIDTH)
    }

    /// Bar length in cells for `value` when the widest bar is `room`.
    fn bar_len(&self, value: f64, room: usize) -> usize {
        let max = self.items.iter().map(|i| i.value).fold(0.0, f64::max);
        if max <= 0.0 {
            return 0;
        }
        chart::bar_value(value / max * room as f64, 1.0, self.progress) as usize
    }
}

impl Widget for BreakdownChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.ctx.panel(self.title.clone());
        let inner = block.inner(area);
        block.render(area, buf);

        let name_width = self.name_width();
        let room = (inner.width as usize).saturating_sub(name_width + VALUE_WIDTH + SHARE_WIDTH + 4);
        let shares = chart::shares(self.items);

        let mut lines: Vec<Line> = self
            .items
            .iter()
            .zip(&shares)
            .map(|(item, share)| {
                let bar = "█".repeat(self.bar_len(item.value, room));
                Line::from(vec![
                    Span::raw(format!(
                        "{:<name_width$} ",
                        format::truncate_width(&item.name, name_width)
                    )),
                    Span::styled(format!("{bar:<room$}"), Style::default().fg(self.color)),
                    Span::raw(format!(" {:>VALUE_WIDTH$}", format::currency(item.value))),
                    Span::styled(format!(" {share:>3.0}%"), self.ctx.muted()),
                ])
            })
            .collect();

        let total: f64 = self.items.iter().map(|i| i.value).sum();
        let total_pad = name_width + room + 1;
        lines.push(Line::from(vec![
            Span::styled(format!("{:<total_pad$}", "Total"), self.ctx.title()),
            Span::styled(
                format!(" {:>VALUE_WIDTH$}", format::currency(total)),
                self.ctx.title(),
            ),
        ]));

        Paragraph::new(lines).render(inner, buf);
    }
}
