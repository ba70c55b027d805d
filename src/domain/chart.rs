//! Chart series derived from the dataset.

use ratatui::style::Color;

use crate::domain::dataset::{Alternative, CostItem};

/// Fixed colour cycle for the LCOE ranking, indexed by rank.
pub const RANK_COLORS: [Color; 3] = [
    Color::Rgb(0x2a, 0x11, 0xe4),
    Color::Rgb(0x37, 0x1f, 0xff),
    Color::Rgb(0x64, 0x6d, 0xff),
];

pub const CAPEX_COLOR: Color = Color::Rgb(0x2a, 0x11, 0xe4);
pub const OPEX_COLOR: Color = Color::Rgb(0x64, 0x6d, 0xff);

/// One group of the CAPEX vs OPEX chart.
#[derive(Debug, Clone, PartialEq)]
pub struct CostGroup<'a> {
    pub label: &'a str,
    pub full_name: &'a str,
    pub capex: f64,
    pub opex_annual: f64,
}

pub fn cost_groups(alternatives: &[Alternative]) -> Vec<CostGroup<'_>> {
    alternatives
        .iter()
        .map(|alt| CostGroup {
            label: alt.short_label(),
            full_name: &alt.name,
            capex: alt.costs.capex,
            opex_annual: alt.costs.opex_annual,
        })
        .collect()
}

/// Maps a truncated axis label back to the full system name. Falls back
/// to the label itself when nothing matches.
pub fn full_name_for<'a>(groups: &[CostGroup<'a>], label: &'a str) -> &'a str {
    groups
        .iter()
        .find(|g| g.label == label)
        .map_or(label, |g| g.full_name)
}

/// One bar of the LCOE chart.
#[derive(Debug, Clone, PartialEq)]
pub struct LcoeBar<'a> {
    pub id: &'a str,
    pub label: &'a str,
    pub full_name: &'a str,
    pub lcoe: f64,
    pub color: Color,
}

/// Alternatives sorted by LCOE, cheapest first. Colour follows rank, not
/// identity. The sort is stable so ties keep dataset order.
pub fn lcoe_ranking(alternatives: &[Alternative]) -> Vec<LcoeBar<'_>> {
    let mut sorted: Vec<&Alternative> = alternatives.iter().collect();
    sorted.sort_by(|a, b| a.costs.lcoe.total_cmp(&b.costs.lcoe));
    sorted
        .into_iter()
        .enumerate()
        .map(|(rank, alt)| LcoeBar {
            id: &alt.id,
            label: alt.short_label(),
            full_name: &alt.name,
            lcoe: alt.costs.lcoe,
            color: RANK_COLORS[rank % RANK_COLORS.len()],
        })
        .collect()
}

/// Scales a value for a bar chart, which only takes integers.
///
/// `scale` turns fractional units into integer ones (100 for $/kWh to
/// cents) and `progress` grows the bar during the entrance reveal.
pub fn bar_value(value: f64, scale: f64, progress: f64) -> u64 {
    let scaled = value.max(0.0) * scale * progress.clamp(0.0, 1.0);
    scaled.round() as u64
}

/// Share of each breakdown item in its total, in percent.
pub fn shares(items: &[CostItem]) -> Vec<f64> {
    let total: f64 = items.iter().map(|item| item.value).sum();
    if total <= 0.0 {
        return vec![0.0; items.len()];
    }
    items.iter().map(|item| item.value / total * 100.0).collect()
}
