use ratatui::{
    prelude::*,
    widgets::{Cell, Row, Table},
};
use unicode_width::UnicodeWidthStr;

use crate::{
    domain::{
        dataset::{Alternative, Logistics},
        format,
    },
    presentation::widgets::{rows, ViewContext},
};

const MAX_KEY_WIDTH: u16 = 24;

/// Design fields first, then the alternative-specific extras and the
/// performance figures, both with humanized keys.
pub fn design_fields(alternative: &Alternative) -> Vec<(String, String)> {
    let design = &alternative.design;
    let mut fields = vec![
        ("Generator".to_string(), design.generator.clone()),
        ("Storage".to_string(), design.storage.clone()),
        ("Capacity".to_string(), design.capacity.clone()),
        ("Autonomy".to_string(), design.autonomy.clone()),
    ];
    let extras = design.extra.iter().chain(&alternative.performance);
    fields.extend(extras.map(|(key, value)| (format::humanize_key(key), value.clone())));
    fields
}

pub fn logistics_fields(logistics: &Logistics) -> Vec<(String, String)> {
    [
        ("Frequency", &logistics.frequency),
        ("Maintenance", &logistics.maintenance),
        ("Dependency", &logistics.dependency),
        ("Scalability", &logistics.scalability_notes),
        ("Footprint", &logistics.footprint),
        ("Lifetime", &logistics.lifetime),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), value.clone()))
    .collect()
}

/// Two-column `label  value` panel.
pub struct FieldTable<'a> {
    title: String,
    fields: Vec<(String, String)>,
    ctx: ViewContext<'a>,
}

impl<'a> FieldTable<'a> {
    pub fn new(
        title: impl Into<String>,
        fields: Vec<(String, String)>,
        ctx: ViewContext<'a>,
    ) -> Self {
        Self {
            title: title.into(),
            fields,
            ctx,
        }
    }

    pub fn design(alternative: &Alternative, ctx: ViewContext<'a>) -> Self {
        Self::new("Design & performance", design_fields(alternative), ctx)
    }

    pub fn logistics(logistics: &Logistics, ctx: ViewContext<'a>) -> Self {
        Self::new("Logistics", logistics_fields(logistics), ctx)
    }

    /// Rows needed for `fields` entries, borders included.
    pub fn height_for(fields: usize) -> u16 {
        rows(fields).saturating_add(2)
    }

    pub fn height(&self) -> u16 {
        Self::height_for(self.fields.len())
    }

    fn key_width(&self) -> u16 {
        self.fields
            .iter()
            .map(|(key, _)| rows(key.width()))
            .max()
            .unwrap_or(0)
            .min(MAX_KEY_WIDTH)
    }
}

impl Widget for FieldTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let widths = [Constraint::Length(self.key_width()), Constraint::Min(8)];
        let muted = self.ctx.muted();
        let rows: Vec<Row> = self
            .fields
            .iter()
            .map(|(key, value)| {
                Row::new([
                    Cell::from(Span::styled(key.clone(), muted)),
                    Cell::from(value.clone()),
                ])
            })
            .collect();
        let table = Table::new(rows, widths)
            .block(self.ctx.panel(self.title.clone()))
            .column_spacing(2);
        Widget::render(table, area, buf);
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
        presentation::{
            config::Styles,
            widgets::testing::{render_lines, screen},
        },
    };

    #[rstest]
    fn test_design_includes_extras_and_performance(dataset: Dataset) {
        let styles = Styles::default();
        let ctx = ViewContext::new(PageTheme::for_route(Route::Dmfc, &dataset), &styles);
        let dmfc = &dataset.alternatives[2];
        let table = FieldTable::design(dmfc, ctx);
        let keys: Vec<&str> = table.fields.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "Generator",
                "Storage",
                "Capacity",
                "Autonomy",
                "Fuel cartridge",
                "Fuel consumption",
                "Duty cycle",
                "Emergency backup",
            ]
        );
        assert_eq!(table.height(), 10);
    }

    #[rstest]
    fn test_logistics_render(dataset: Dataset) {
        let styles = Styles::default();
        let ctx = ViewContext::new(PageTheme::for_route(Route::Wind, &dataset), &styles);
        let table = FieldTable::logistics(&dataset.alternatives[1].logistics, ctx);
        let height = table.height();
        let text = screen(&render_lines(table, 70, height));
        assert!(text.contains("Logistics"), "{text}");
        assert!(text.contains("Dependency"), "{text}");
        assert!(text.contains("Site wind resource"), "{text}");
    }
}
