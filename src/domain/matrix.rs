use ratatui::style::Color;

use crate::domain::dataset::{Category, Dataset};

/// Upper bound of the 1-5 scoring scale.
pub const SCORE_MAX: f64 = 5.0;

pub fn weight_sum(categories: &[Category]) -> f64 {
    categories.iter().map(|c| c.weight).sum()
}

/// `Σ values[i] * categories[i].weight`, over the aligned prefix.
pub fn weighted_total(values: &[f64], categories: &[Category]) -> f64 {
    values
        .iter()
        .zip(categories)
        .map(|(value, category)| value * category.weight)
        .sum()
}

/// One system's row in the matrix, ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemScores<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub color: Color,
    pub values: &'a [f64],
    pub total: f64,
}

/// Joins each score entry with its alternative. Entries whose system is
/// unknown are skipped; validation reports them before we get here.
pub fn system_scores(dataset: &Dataset) -> Vec<SystemScores<'_>> {
    dataset
        .decision_matrix
        .scores
        .iter()
        .filter_map(|score| {
            let alt = dataset.alternative(&score.system)?;
            Some(SystemScores {
                id: &alt.id,
                name: &alt.name,
                color: alt.color.into(),
                values: &score.values,
                total: score.total_score,
            })
        })
        .collect()
}

/// Id of the system with the highest precomputed total, if any.
pub fn leader<'a>(scores: &[SystemScores<'a>]) -> Option<&'a str> {
    scores
        .iter()
        .max_by(|a, b| a.total.total_cmp(&b.total))
        .map(|s| s.id)
}

/// Vertex positions of a radar polygon in the unit circle.
///
/// Axis `i` of `n` starts at 12 o'clock and proceeds clockwise, so the
/// first category sits at the top. Values are scaled by `progress`.
pub fn radar_points(values: &[f64], axes: usize, progress: f64) -> Vec<(f64, f64)> {
    (0..axes)
        .map(|i| {
            let value = values.get(i).copied().unwrap_or(0.0).clamp(0.0, SCORE_MAX);
            let radius = value / SCORE_MAX * progress;
            let (x, y) = axis_direction(i, axes);
            (x * radius, y * radius)
        })
        .collect()
}

/// Unit vector of axis `i` out of `axes`.
pub fn axis_direction(i: usize, axes: usize) -> (f64, f64) {
    if axes == 0 {
        return (0.0, 1.0);
    }
    let angle = std::f64::consts::FRAC_PI_2 - std::f64::consts::TAU * i as f64 / axes as f64;
    (angle.cos(), angle.sin())
}
