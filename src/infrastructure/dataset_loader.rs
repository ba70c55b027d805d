//! Reads the dashboard dataset once at start-up.

use std::path::Path;
use std::sync::Arc;

use color_eyre::eyre::{Result, WrapErr};

use crate::domain::{
    dataset::Dataset,
    format,
    validation::{validate, DatasetError},
};

/// The dataset compiled into the binary.
pub const BUNDLED_DATASET: &str = include_str!("../../assets/dashboard.json");

/// Where the dataset came from, for logs and the `--check` summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    Bundled,
    File(String),
}

impl std::fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetSource::Bundled => write!(f, "bundled dataset"),
            DatasetSource::File(path) => write!(f, "{path}"),
        }
    }
}

pub fn read_dataset(path: Option<&Path>) -> Result<(Dataset, DatasetSource), DatasetError> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            let dataset = Dataset::from_json(&json)?;
            Ok((dataset, DatasetSource::File(path.display().to_string())))
        }
        None => Ok((Dataset::from_json(BUNDLED_DATASET)?, DatasetSource::Bundled)),
    }
}

/// Reads and validates the dataset. Any problem is fatal.
pub fn load_dataset(path: Option<&Path>) -> Result<Arc<Dataset>> {
    let (dataset, source) = read_dataset(path).wrap_err("Unable to load dataset")?;
    if let Err(errors) = validate(&dataset) {
        for error in errors.errors() {
            log::error!("{source}: {error}");
        }
        return Err(errors).wrap_err_with(|| format!("Invalid dataset ({source})"));
    }
    tracing::info!(
        %source,
        alternatives = dataset.alternatives.len(),
        categories = dataset.decision_matrix.categories.len(),
        "dataset loaded"
    );
    Ok(Arc::new(dataset))
}

/// Short human-readable report for `--check`.
pub fn summary(dataset: &Dataset) -> String {
    let mut out = format!(
        "{}\n{}\n",
        dataset.project_info.title, dataset.project_info.client
    );
    for alt in &dataset.alternatives {
        out.push_str(&format!(
            "  {:<6} {:<20} LCOE {:>6}  TCO {}\n",
            alt.id,
            alt.name,
            format::currency_fixed2(alt.costs.lcoe),
            format::currency(alt.costs.tco_20_years),
        ));
    }
    out.push_str(&format!(
        "  {} categories, {} scored systems, {} recommendations\n",
        dataset.decision_matrix.categories.len(),
        dataset.decision_matrix.scores.len(),
        dataset.strategic_recommendations.len(),
    ));
    out
}
