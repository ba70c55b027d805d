use ratatui::{
    prelude::*,
    widgets::{Cell, Row, Table},
};

use crate::{
    domain::{
        dataset::{ResourceNeed, ScaleTier},
        format,
    },
    presentation::widgets::{rows, ViewContext},
};

const VIABILITY_MAX: u8 = 5;

/// `●●●○○` for a viability of 3.
pub fn viability_dots(viability: u8) -> String {
    let filled = viability.min(VIABILITY_MAX) as usize;
    format!(
        "{}{}",
        "●".repeat(filled),
        "○".repeat(VIABILITY_MAX as usize - filled)
    )
}

pub fn resources_text(resources: &[ResourceNeed]) -> String {
    if resources.is_empty() {
        return "-".to_string();
    }
    resources
        .iter()
        .map(|r| format!("{}: {} {}", r.name, format::number(r.quantity), r.unit))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Viability of the system at each deployment scale.
pub struct ScalabilityTable<'a> {
    tiers: &'a [ScaleTier],
    ctx: ViewContext<'a>,
}

impl<'a> ScalabilityTable<'a> {
    pub fn new(tiers: &'a [ScaleTier], ctx: ViewContext<'a>) -> Self {
        Self { tiers, ctx }
    }

    pub fn height(tiers: usize) -> u16 {
        rows(tiers).saturating_add(3)
    }
}

impl Widget for ScalabilityTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let accent = Style::default().fg(self.ctx.theme.accent);
        let rows: Vec<Row> = self
            .tiers
            .iter()
            .map(|tier| {
                Row::new([
                    Cell::from(tier.scale.clone()),
                    Cell::from(Line::from(format::number(f64::from(tier.units))).right_aligned()),
                    Cell::from(Span::styled(viability_dots(tier.viability), accent)),
                    Cell::from(resources_text(&tier.resources)),
                ])
            })
            .collect();
        let widths = [
            Constraint::Length(10),
            Constraint::Length(6),
            Constraint::Length(9),
            Constraint::Min(10),
        ];
        let table = Table::new(rows, widths)
            .header(Row::new(["Scale", "Units", "Viability", "Resources"]).style(self.ctx.title()))
            .block(self.ctx.panel("Scalability"))
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
        presentation::{config::Styles, widgets::testing::render_lines},
    };

    #[rstest]
    #[case(0, "○○○○○")]
    #[case(3, "●●●○○")]
    #[case(5, "●●●●●")]
    #[case(9, "●●●●●")]
    fn test_viability_dots(#[case] viability: u8, #[case] expected: &str) {
        assert_eq!(viability_dots(viability), expected);
    }

    #[rstest]
    fn test_resources_text(dataset: Dataset) {
        let tiers = &dataset.alternatives[2].details.scalability;
        assert_eq!(resources_text(&tiers[2].resources), "Cartridges/yr: 21,000 units");
        assert_eq!(resources_text(&[]), "-");
    }

    #[rstest]
    fn test_render(dataset: Dataset) {
        let styles = Styles::default();
        let ctx = ViewContext::new(PageTheme::for_route(Route::Wind, &dataset), &styles);
        let tiers = &dataset.alternatives[1].details.scalability;
        let lines = render_lines(
            ScalabilityTable::new(tiers, ctx),
            70,
            ScalabilityTable::height(tiers.len()),
        );
        assert!(lines[2].contains("Pilot"), "{lines:#?}");
        assert!(lines[4].contains("1,000"), "{lines:#?}");
        assert!(lines[4].contains("●○○○○"), "{lines:#?}");
    }
}
