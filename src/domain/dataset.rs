use std::collections::BTreeMap;

use ratatui::style::Color;
use serde::Deserialize;

use crate::domain::validation::DatasetError;

/// The whole dashboard dataset.
///
/// Loaded once at start-up and shared read-only for the lifetime of the
/// process.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub project_info: ProjectInfo,
    pub kpis: Kpis,
    pub alternatives: Vec<Alternative>,
    pub decision_matrix: DecisionMatrix,
    #[serde(default)]
    pub strategic_recommendations: Vec<StrategicRecommendation>,
}

impl Dataset {
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        serde_json::from_str(json).map_err(DatasetError::Parse)
    }

    /// Finds an alternative by its stable id.
    pub fn alternative(&self, id: &str) -> Option<&Alternative> {
        self.alternatives.iter().find(|alt| alt.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    pub title: String,
    pub client: String,
    pub load_profile: LoadProfile,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoadProfile {
    pub power: Quantity,
    pub energy: Quantity,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Quantity {
    pub value: f64,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kpis {
    pub primary_recommendation: String,
    pub most_cost_effective_lcoe: KpiFigure,
    pub viable_alternative_lcoe: KpiFigure,
    pub not_recommended_lcoe: KpiFigure,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct KpiFigure {
    pub value: f64,
    pub unit: String,
    pub system: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alternative {
    pub id: String,
    pub name: String,
    pub context: String,
    pub color: HexColor,
    pub design: Design,
    pub costs: Costs,
    #[serde(default)]
    pub performance: BTreeMap<String, String>,
    pub logistics: Logistics,
    pub details: TechnologyDetails,
}

impl Alternative {
    /// Short axis label: the last word of the name.
    pub fn short_label(&self) -> &str {
        self.name.split_whitespace().last().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Design {
    pub generator: String,
    pub storage: String,
    pub capacity: String,
    pub autonomy: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Costs {
    pub capex: f64,
    pub opex_annual: f64,
    pub lcoe: f64,
    #[serde(rename = "tco20Years")]
    pub tco_20_years: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Logistics {
    pub frequency: String,
    pub maintenance: String,
    pub dependency: String,
    pub lifetime: String,
    pub scalability_notes: String,
    pub footprint: String,
}

/// Figures only shown on the per-technology page. They belong to their
/// parent alternative and are cross-checked against its costs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnologyDetails {
    pub summary: String,
    pub highlight: Highlight,
    pub capex_breakdown: Vec<CostItem>,
    #[serde(default)]
    pub opex_breakdown: Vec<CostItem>,
    #[serde(default)]
    pub scalability: Vec<ScaleTier>,
    #[serde(default)]
    pub power_curve: Vec<CurvePoint>,
    #[serde(default)]
    pub cartridges: Vec<Cartridge>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Highlight {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CostItem {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScaleTier {
    pub scale: String,
    pub units: u32,
    /// 0 (not viable) to 5 (fully viable).
    pub viability: u8,
    #[serde(default)]
    pub resources: Vec<ResourceNeed>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResourceNeed {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurvePoint {
    pub wind_speed: f64,
    pub power: f64,
    #[serde(default)]
    pub label: String,
}

/// A fuel cartridge size and how long one lasts at the site's load.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cartridge {
    pub name: String,
    pub autonomy_days: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DecisionMatrix {
    pub categories: Vec<Category>,
    pub scores: Vec<ScoreEntry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Category {
    pub name: String,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreEntry {
    /// Stable alternative id.
    pub system: String,
    pub values: Vec<f64>,
    pub total_score: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StrategicRecommendation {
    pub id: String,
    pub title: String,
    pub recommendation: String,
}

/// A `#rrggbb` colour carried by the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn parse(s: &str) -> Result<Self, DatasetError> {
        let invalid = || DatasetError::InvalidColor(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl TryFrom<String> for HexColor {
    type Error = DatasetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for Color {
    fn from(value: HexColor) -> Self {
        Color::Rgb(value.r, value.g, value.b)
    }
}
