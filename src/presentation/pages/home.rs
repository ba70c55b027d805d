use ratatui::prelude::*;

use crate::{
    domain::{
        chart::{cost_groups, lcoe_ranking},
        dataset::Dataset,
        matrix::system_scores,
        reveal::Section,
    },
    presentation::{
        pages::{stack, PageView},
        widgets::{
            cost_chart::CostChart,
            decision_matrix::{RadarChart, ScoreTable},
            kpi_card::{KpiCard, RecommendationBanner},
            lcoe_chart::LcoeChart,
            project_info::ProjectInfoCard,
            recommendations::Recommendations,
            reveal::Revealed,
            spec_table::SpecTable,
        },
    },
};

const PROJECT_HEIGHT: u16 = 5;
const KPI_HEIGHT: u16 = 4;
const CHARTS_HEIGHT: u16 = 14;
const RADAR_HEIGHT: u16 = 18;
/// Below this width the radar and the score table are stacked.
const MATRIX_SIDE_BY_SIDE: u16 = 140;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeRow {
    Project,
    Kpis,
    Charts,
    SpecTable,
    Recommendations,
    Matrix { stacked: bool },
}

pub fn rows(dataset: &Dataset, width: u16) -> Vec<(HomeRow, u16)> {
    let table = ScoreTable::height(dataset.decision_matrix.categories.len());
    let stacked = width < MATRIX_SIDE_BY_SIDE;
    let matrix = if stacked {
        RADAR_HEIGHT + table
    } else {
        RADAR_HEIGHT.max(table)
    };
    vec![
        (HomeRow::Project, PROJECT_HEIGHT),
        (HomeRow::Kpis, KPI_HEIGHT),
        (HomeRow::Charts, CHARTS_HEIGHT),
        (
            HomeRow::SpecTable,
            SpecTable::height(dataset.alternatives.len()),
        ),
        (
            HomeRow::Recommendations,
            Recommendations::height(&dataset.strategic_recommendations, width),
        ),
        (HomeRow::Matrix { stacked }, matrix),
    ]
}

pub fn render(view: &PageView, area: Rect, buf: &mut Buffer) {
    for (row, rect) in stack(&rows(view.dataset, area.width), area) {
        render_row(view, row, rect, buf);
    }
}

fn render_row(view: &PageView, row: HomeRow, area: Rect, buf: &mut Buffer) {
    let dataset = view.dataset;
    let ctx = view.ctx;
    let progress = |section| view.reveal.progress(section);

    match row {
        HomeRow::Project => {
            let [info, banner] =
                Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                    .areas(area);
            let p = progress(Section::Project);
            Revealed::new(ProjectInfoCard::new(&dataset.project_info, ctx), p).render(info, buf);
            Revealed::new(
                RecommendationBanner::new(&dataset.kpis.primary_recommendation, ctx),
                p,
            )
            .render(banner, buf);
        }
        HomeRow::Kpis => {
            let kpis = &dataset.kpis;
            let cards = [
                KpiCard::lcoe("Most cost-effective", &kpis.most_cost_effective_lcoe, ctx)
                    .highlight(true),
                KpiCard::lcoe("Viable alternative", &kpis.viable_alternative_lcoe, ctx),
                KpiCard::lcoe("Not recommended", &kpis.not_recommended_lcoe, ctx),
            ];
            let areas: [Rect; 3] = Layout::horizontal([Constraint::Ratio(1, 3); 3]).areas(area);
            let p = progress(Section::Kpis);
            for (card, rect) in cards.into_iter().zip(areas) {
                Revealed::new(card, p).render(rect, buf);
            }
        }
        HomeRow::Charts => {
            let [cost, lcoe] =
                Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                    .areas(area);
            let p = progress(Section::CostChart);
            let chart = CostChart::new(cost_groups(&dataset.alternatives), ctx)
                .selected(view.selected)
                .progress(p);
            Revealed::new(chart, p).render(cost, buf);
            let p = progress(Section::LcoeChart);
            let chart = LcoeChart::new(lcoe_ranking(&dataset.alternatives), ctx).progress(p);
            Revealed::new(chart, p).render(lcoe, buf);
        }
        HomeRow::SpecTable => {
            Revealed::new(
                SpecTable::new(&dataset.alternatives, ctx),
                progress(Section::SpecTable),
            )
            .render(area, buf);
        }
        HomeRow::Recommendations => {
            Revealed::new(
                Recommendations::new(&dataset.strategic_recommendations, ctx),
                progress(Section::Recommendations),
            )
            .render(area, buf);
        }
        HomeRow::Matrix { stacked } => {
            let systems = system_scores(dataset);
            let categories = &dataset.decision_matrix.categories;
            let [radar, table] = if stacked {
                Layout::vertical([
                    Constraint::Length(RADAR_HEIGHT),
                    Constraint::Length(ScoreTable::height(categories.len())),
                ])
                .areas(area)
            } else {
                Layout::horizontal([Constraint::Percentage(35), Constraint::Percentage(65)])
                    .areas(area)
            };
            let table = if stacked {
                table
            } else {
                Rect {
                    height: ScoreTable::height(categories.len()).min(table.height),
                    ..table
                }
            };
            let p = progress(Section::Matrix);
            Revealed::new(RadarChart::new(categories, &systems, ctx).progress(p), p)
                .render(radar, buf);
            Revealed::new(ScoreTable::new(categories, &systems, ctx), p).render(table, buf);
        }
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
            dataset::fixtures::dataset,
            reveal::{RevealClock, RevealPlan},
            route::Route,
            theme::PageTheme,
        },
        infrastructure::tui::test::buffer_lines,
        presentation::{config::Styles, widgets::ViewContext},
    };

    fn draw(dataset: &Dataset, reveal: &RevealState, width: u16) -> Vec<String> {
        let styles = Styles::default();
        let view = PageView {
            dataset,
            route: Route::Home,
            selected: 0,
            reveal,
            ctx: ViewContext::new(PageTheme::for_route(Route::Home, dataset), &styles),
        };
        let height: u16 = rows(dataset, width).iter().map(|(_, h)| h).sum();
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        render(&view, area, &mut buf);
        buffer_lines(&buf)
    }

    #[rstest]
    fn test_matrix_layout_follows_width(dataset: Dataset) {
        let wide = rows(&dataset, 160);
        let narrow = rows(&dataset, 100);
        assert_eq!(wide.last(), Some(&(HomeRow::Matrix { stacked: false }, 18)));
        assert_eq!(narrow.last(), Some(&(HomeRow::Matrix { stacked: true }, 27)));
    }

    #[rstest]
    fn test_everything_drawn_when_reveal_done(dataset: Dataset) {
        let text = draw(&dataset, &RevealState::default(), 140).join("\n");
        for needle in [
            "Bogotá Environmental Monitoring Network",
            "Photovoltaic Solar with LiFePO4 storage",
            "Most cost-effective",
            "CAPEX vs OPEX",
            "LCOE ($/kWh)",
            "$4,924",
            "Adopt solar as the baseline:",
            "Decision matrix",
            "4.80",
        ] {
            assert!(text.contains(needle), "missing {needle:?} in\n{text}");
        }
    }

    #[rstest]
    fn test_sections_hidden_at_start_of_reveal(dataset: Dataset) {
        let reveal = RevealState {
            clock: RevealClock::new(RevealPlan::for_route(Route::Home)),
            enabled: true,
            ..RevealState::default()
        };
        let text = draw(&dataset, &reveal, 140).join("\n");
        // project starts at once, the matrix only after 1.2 s
        assert!(!text.contains("Decision matrix"), "{text}");
        assert!(!text.contains("$4,924"), "{text}");
    }
}
