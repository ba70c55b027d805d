use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::{
    domain::{dataset::Alternative, format, reveal::Section, route::Route},
    presentation::{
        pages::{stack, PageView},
        widgets::{
            breakdown_chart::BreakdownChart,
            cartridge_chart::CartridgeChart,
            field_table::{design_fields, logistics_fields, FieldTable},
            kpi_card::KpiCard,
            power_curve::PowerCurve,
            reveal::Revealed,
            scalability_table::ScalabilityTable,
            tech_header::TechHeader,
            ViewContext,
        },
    },
};

const METRICS_HEIGHT: u16 = 4;
const POWER_CURVE_HEIGHT: u16 = 14;
const NOT_FOUND_HEIGHT: u16 = 5;
/// Below this width the design and logistics panels are stacked.
const DETAILS_SIDE_BY_SIDE: u16 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TechRow {
    NotFound,
    Header,
    Metrics,
    Breakdown { opex: bool },
    PowerCurve,
    Cartridges,
    Details { stacked: bool },
    Scalability,
}

/// Rows of a technology page. `None` means the route's alternative is
/// missing from the dataset, which gets a single "not found" panel.
pub fn rows(alternative: Option<&Alternative>, width: u16) -> Vec<(TechRow, u16)> {
    let Some(alt) = alternative else {
        return vec![(TechRow::NotFound, NOT_FOUND_HEIGHT)];
    };
    let details = &alt.details;

    let opex = !details.opex_breakdown.is_empty();
    let mut breakdown = BreakdownChart::height(details.capex_breakdown.len());
    if opex {
        breakdown = breakdown.max(BreakdownChart::height(details.opex_breakdown.len()));
    }

    let design = FieldTable::height_for(design_fields(alt).len());
    let logistics = FieldTable::height_for(logistics_fields(&alt.logistics).len());
    let stacked = width < DETAILS_SIDE_BY_SIDE;
    let details_height = if stacked {
        design + logistics
    } else {
        design.max(logistics)
    };

    let mut rows = vec![
        (TechRow::Header, TechHeader::height(alt, width)),
        (TechRow::Metrics, METRICS_HEIGHT),
        (TechRow::Breakdown { opex }, breakdown),
    ];
    if !details.power_curve.is_empty() {
        rows.push((TechRow::PowerCurve, POWER_CURVE_HEIGHT));
    }
    if !details.cartridges.is_empty() {
        rows.push((
            TechRow::Cartridges,
            CartridgeChart::height(details.cartridges.len()),
        ));
    }
    rows.push((TechRow::Details { stacked }, details_height));
    if !details.scalability.is_empty() {
        rows.push((
            TechRow::Scalability,
            ScalabilityTable::height(details.scalability.len()),
        ));
    }
    rows
}

pub fn render(view: &PageView, area: Rect, buf: &mut Buffer) {
    let Some(alt) = view.route.resolve(view.dataset) else {
        NotFound::new(view.route, view.ctx).render(area, buf);
        return;
    };
    for (row, rect) in stack(&rows(Some(alt), area.width), area) {
        render_row(view, alt, row, rect, buf);
    }
}

fn render_row(view: &PageView, alt: &Alternative, row: TechRow, area: Rect, buf: &mut Buffer) {
    let ctx = view.ctx;
    let details = &alt.details;
    let progress = |section| view.reveal.progress(section);

    match row {
        TechRow::NotFound => NotFound::new(view.route, ctx).render(area, buf),
        TechRow::Header => {
            Revealed::new(TechHeader::new(alt, ctx), progress(Section::Header)).render(area, buf);
        }
        TechRow::Metrics => {
            let costs = &alt.costs;
            let cards = [
                KpiCard::new(&details.highlight.label, &details.highlight.value, ctx)
                    .caption(&details.highlight.caption)
                    .highlight(true),
                KpiCard::new("CAPEX", format::currency(costs.capex), ctx)
                    .caption(format!("LCOE {}/kWh", format::currency_fixed2(costs.lcoe))),
                KpiCard::new("OPEX / year", format::currency(costs.opex_annual), ctx),
                KpiCard::new("TCO 20 years", format::currency(costs.tco_20_years), ctx),
            ];
            let areas: [Rect; 4] = Layout::horizontal([Constraint::Ratio(1, 4); 4]).areas(area);
            let p = progress(Section::Metrics);
            for (card, rect) in cards.into_iter().zip(areas) {
                Revealed::new(card, p).render(rect, buf);
            }
        }
        TechRow::Breakdown { opex } => {
            let p = progress(Section::Breakdown);
            let capex = BreakdownChart::new("CAPEX breakdown", &details.capex_breakdown, ctx)
                .progress(p);
            if opex {
                let [left, right] =
                    Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                        .areas(area);
                let opex_chart =
                    BreakdownChart::new("OPEX breakdown (per year)", &details.opex_breakdown, ctx)
                        .progress(p);
                Revealed::new(capex, p).render(left, buf);
                Revealed::new(opex_chart, p).render(right, buf);
            } else {
                Revealed::new(capex, p).render(area, buf);
            }
        }
        TechRow::PowerCurve => {
            let p = progress(Section::PowerCurve);
            Revealed::new(PowerCurve::new(&details.power_curve, ctx).progress(p), p)
                .render(area, buf);
        }
        TechRow::Cartridges => {
            let p = progress(Section::Cartridges);
            Revealed::new(CartridgeChart::new(&details.cartridges, ctx).progress(p), p)
                .render(area, buf);
        }
        TechRow::Details { stacked } => {
            let design = FieldTable::design(alt, ctx);
            let logistics = FieldTable::logistics(&alt.logistics, ctx);
            let [left, right] = if stacked {
                Layout::vertical([
                    Constraint::Length(design.height()),
                    Constraint::Length(logistics.height()),
                ])
                .areas(area)
            } else {
                Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
                    .areas(area)
            };
            Revealed::new(design, progress(Section::Design)).render(left, buf);
            Revealed::new(logistics, progress(Section::Logistics)).render(right, buf);
        }
        TechRow::Scalability => {
            Revealed::new(
                ScalabilityTable::new(&details.scalability, ctx),
                progress(Section::Scalability),
            )
            .render(area, buf);
        }
    }
}

/// Drawn instead of a technology page whose alternative is missing.
struct NotFound<'a> {
    route: Route,
    ctx: ViewContext<'a>,
}

impl<'a> NotFound<'a> {
    fn new(route: Route, ctx: ViewContext<'a>) -> Self {
        Self { route, ctx }
    }
}

impl Widget for NotFound<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let id = self.route.alternative_id().unwrap_or_default();
        let lines = vec![
            Line::from(format!(
                "The dataset has no alternative with id \"{id}\" for {}.",
                self.route.path()
            )),
            Line::styled("Press 1 to return home.", self.ctx.muted()),
        ];
        Paragraph::new(lines)
            .block(self.ctx.panel(format!("{} not found", self.route)))
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
        core::state::RevealState,
        domain::{
            dataset::{fixtures::dataset, Dataset},
            theme::PageTheme,
        },
        infrastructure::tui::test::buffer_lines,
        presentation::config::Styles,
    };

    fn draw(dataset: &Dataset, route: Route, width: u16) -> Vec<String> {
        let styles = Styles::default();
        let reveal = RevealState::default();
        let view = PageView {
            dataset,
            route,
            selected: 0,
            reveal: &reveal,
            ctx: ViewContext::new(PageTheme::for_route(route, dataset), &styles),
        };
        let height: u16 = rows(route.resolve(dataset), width)
            .iter()
            .map(|(_, h)| h)
            .sum();
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        render(&view, area, &mut buf);
        buffer_lines(&buf)
    }

    #[rstest]
    fn test_rows_follow_available_data(dataset: Dataset) {
        let kinds = |route: Route| -> Vec<TechRow> {
            rows(route.resolve(&dataset), 120)
                .into_iter()
                .map(|(row, _)| row)
                .collect()
        };
        assert_eq!(
            kinds(Route::Solar),
            vec![
                TechRow::Header,
                TechRow::Metrics,
                TechRow::Breakdown { opex: false },
                TechRow::Details { stacked: false },
                TechRow::Scalability,
            ]
        );
        assert!(kinds(Route::Wind).contains(&TechRow::PowerCurve));
        assert!(kinds(Route::Dmfc).contains(&TechRow::Breakdown { opex: true }));
        assert!(kinds(Route::Dmfc).contains(&TechRow::Cartridges));
        assert!(!kinds(Route::Wind).contains(&TechRow::Cartridges));
    }

    #[rstest]
    fn test_solar_page(dataset: Dataset) {
        let text = draw(&dataset, Route::Solar, 120).join("\n");
        for needle in [
            "Photovoltaic Solar",
            "Primary",
            "Availability",
            "99.77%",
            "$4,924",
            "LCOE $0.31/kWh",
            "$6,524",
            "CAPEX breakdown",
            "Tilt",
            "Peak sun hours",
            "Quarterly visual inspection",
            "Massive",
        ] {
            assert!(text.contains(needle), "missing {needle:?} in\n{text}");
        }
        assert!(!text.contains("Power curve"), "{text}");
    }

    #[rstest]
    fn test_dmfc_page_has_opex_breakdown(dataset: Dataset) {
        let text = draw(&dataset, Route::Dmfc, 120).join("\n");
        assert!(text.contains("OPEX breakdown"), "{text}");
        assert!(text.contains("$5,230"), "{text}");
        assert!(text.contains("Autonomy per cartridge"), "{text}");
        assert!(text.contains("17.4 days"), "{text}");
    }

    #[rstest]
    fn test_missing_alternative_shows_not_found(mut dataset: Dataset) {
        dataset.alternatives.retain(|alt| alt.id != "wind");
        let lines = draw(&dataset, Route::Wind, 80);
        assert_eq!(lines.len(), NOT_FOUND_HEIGHT as usize);
        let text = lines.join("\n");
        assert!(text.contains("Wind not found"), "{text}");
        assert!(text.contains("\"wind\""), "{text}");
    }
}
