use ratatui::{
    prelude::*,
    widgets::{Cell, Row, Table},
};

use crate::{
    domain::{dataset::Alternative, format},
    presentation::widgets::{rows, ViewContext},
};

const HEADERS: [&str; 8] = [
    "System",
    "Context",
    "Generator",
    "Storage",
    "Autonomy",
    "CAPEX",
    "OPEX/yr",
    "LCOE",
];

/// Formatted cells of one alternative's row.
pub fn row_cells(alternative: &Alternative) -> [String; 8] {
    [
        alternative.name.clone(),
        alternative.context.clone(),
        alternative.design.generator.clone(),
        alternative.design.storage.clone(),
        alternative.design.autonomy.clone(),
        format::currency(alternative.costs.capex),
        format::currency(alternative.costs.opex_annual),
        format::currency_fixed2(alternative.costs.lcoe),
    ]
}

/// Side-by-side technical comparison, one row per alternative.
pub struct SpecTable<'a> {
    alternatives: &'a [Alternative],
    ctx: ViewContext<'a>,
}

impl<'a> SpecTable<'a> {
    pub fn new(alternatives: &'a [Alternative], ctx: ViewContext<'a>) -> Self {
        Self { alternatives, ctx }
    }

    pub fn height(alternatives: usize) -> u16 {
        rows(alternatives).saturating_add(3)
    }
}

impl Widget for SpecTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows: Vec<Row> = self
            .alternatives
            .iter()
            .map(|alt| {
                let [name, rest @ ..] = row_cells(alt);
                let mut cells = vec![Cell::from(Span::styled(
                    name,
                    Style::default()
                        .fg(alt.color.into())
                        .add_modifier(Modifier::BOLD),
                ))];
                cells.extend(rest.into_iter().map(Cell::from));
                Row::new(cells)
            })
            .collect();
        let widths = [
            Constraint::Min(12),
            Constraint::Length(15),
            Constraint::Min(14),
            Constraint::Min(14),
            Constraint::Length(12),
            Constraint::Length(9),
            Constraint::Length(8),
            Constraint::Length(6),
        ];
        let table = Table::new(rows, widths)
            .header(Row::new(HEADERS).style(self.ctx.title()))
            .block(self.ctx.panel("Technical comparison"))
            .column_spacing(1);
        Widget::render(table, area, buf);
    }
}
